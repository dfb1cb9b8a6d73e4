use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BohrError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: u32,
        reason: &'static str,
    },

    #[error("Transition {n_initial}→{n_final} has no energy difference; wavelength and frequency are undefined")]
    DivisionUndefined { n_initial: u32, n_final: u32 },
}

pub type Result<T> = std::result::Result<T, BohrError>;

impl BohrError {
    pub(crate) fn below_one(name: &'static str, value: u32) -> Self {
        BohrError::InvalidParameter {
            name,
            value,
            reason: "must be at least 1",
        }
    }
}
