use lift_core::CarId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarError {
    #[error("invalid floor {floor} for elevator {car} (floors 1..={total_floors})")]
    InvalidFloor {
        car:          CarId,
        floor:        u32,
        total_floors: u32,
    },
}

pub type CarResult<T> = Result<T, CarError>;
