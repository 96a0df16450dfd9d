use thiserror::Error;

/// Failure to turn one raw target line into addresses.
///
/// These never abort a run: the offending line is reported and contributes
/// no hosts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("Error parsing CIDR notation {spec}: {reason}")]
    Cidr { spec: String, reason: String },

    #[error("Error parsing IP range {spec}: {reason}")]
    Range { spec: String, reason: String },

    #[error("Not a valid IP address: {spec}")]
    Address { spec: String },
}
