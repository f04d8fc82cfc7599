use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ControllerError {
    UnauthorizedUpgrade = 1,
    MissingResolver = 2,
    Retired = 3,
    NotActive = 4,
    InvalidLabel = 5,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::UnauthorizedUpgrade => write!(f, "Upgrade not authorized"),
            ControllerError::MissingResolver => write!(f, "No resolver registered for base node"),
            ControllerError::Retired => write!(f, "Controller is retired"),
            ControllerError::NotActive => write!(f, "Controller has not been activated"),
            ControllerError::InvalidLabel => write!(f, "Invalid domain label"),
        }
    }
}
