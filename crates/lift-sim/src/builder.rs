//! Fluent builder for constructing a [`Controller`].

use lift_car::Car;
use lift_core::{BankConfig, CarId, LiftError, SimClock};
use lift_dispatch::{CostDispatcher, DispatchPolicy, ScoreCache};
use lift_schedule::CompletionQueue;

use crate::{
    BankObserver, Controller, EventLog, EventLogger, FacadeLogger, NoopObserver, SimError,
    SimResult,
};

/// Fluent builder for [`Controller<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                         |
/// |-------------------------|---------------------------------|
/// | `.observer(o)`          | [`NoopObserver`]                |
/// | `.logger(l)`            | [`FacadeLogger`]                |
/// | `.policy(p)`            | [`CostDispatcher::default()`]   |
/// | `.initial_floors(v)`    | Every car at floor 1            |
///
/// # Example
///
/// ```rust,ignore
/// let mut bank = BankBuilder::new(BankConfig::default())
///     .initial_floors(vec![1, 1, 5, 10])
///     .observer(trace)
///     .build()?;
/// bank.request_elevator(7, CallDirection::Up);
/// ```
pub struct BankBuilder<O: BankObserver = NoopObserver> {
    config:         BankConfig,
    observer:       O,
    logger:         Option<Box<dyn EventLogger>>,
    policy:         Option<Box<dyn DispatchPolicy>>,
    initial_floors: Option<Vec<u32>>,
}

impl BankBuilder<NoopObserver> {
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            observer:       NoopObserver,
            logger:         None,
            policy:         None,
            initial_floors: None,
        }
    }
}

impl<O: BankObserver> BankBuilder<O> {
    /// Register the single observer that receives every snapshot.
    pub fn observer<P: BankObserver>(self, observer: P) -> BankBuilder<P> {
        BankBuilder {
            config: self.config,
            observer,
            logger: self.logger,
            policy: self.policy,
            initial_floors: self.initial_floors,
        }
    }

    /// Replace the default [`FacadeLogger`].
    pub fn logger(mut self, logger: impl EventLogger + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Replace the default [`CostDispatcher`].
    pub fn policy(mut self, policy: impl DispatchPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Starting floor of each car, in id order.  Must be length `car_count`.
    /// `reset` puts the cars back here.
    pub fn initial_floors(mut self, floors: Vec<u32>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Validate inputs, place the cars and return a ready [`Controller`].
    pub fn build(self) -> SimResult<Controller<O>> {
        self.config.validate().map_err(|e| match e {
            LiftError::Config(msg) => SimError::Config(msg),
            other => SimError::Core(other),
        })?;
        let car_count = self.config.car_count;
        let total_floors = self.config.total_floors;

        // ── Validate and resolve optional inputs ──────────────────────────
        let floors = match self.initial_floors {
            Some(f) => {
                if f.len() != car_count {
                    return Err(SimError::CarCountMismatch {
                        expected: car_count,
                        got:      f.len(),
                        what:     "initial floors",
                    });
                }
                f
            }
            None => vec![1; car_count],
        };

        let cars = floors
            .iter()
            .enumerate()
            .map(|(i, &floor)| Car::placed(CarId::from_index(i), floor, total_floors))
            .collect::<Result<Vec<Car>, _>>()
            .map_err(|e| SimError::Config(e.to_string()))?;

        Ok(Controller {
            clock:        SimClock::new(self.config.start_of_day_secs),
            config:       self.config,
            initial_cars: cars.clone(),
            cars,
            pending:      Vec::new(),
            log:          EventLog::new(),
            completions:  CompletionQueue::new(),
            scores:       ScoreCache::new(),
            generation:   0,
            ticks:        0,
            policy:       self.policy.unwrap_or_else(|| Box::new(CostDispatcher::default())),
            logger:       self.logger.unwrap_or_else(|| Box::new(FacadeLogger)),
            observer:     self.observer,
        })
    }
}
