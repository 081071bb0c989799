use std::fmt::Display;

/// Coarse region classification derived from the parity of a project code.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GroupRegion {
    Ovs,
    Chn,
    Unknown,
}

impl Display for GroupRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupRegion::Ovs => write!(f, "OVS"),
            GroupRegion::Chn => write!(f, "CHN"),
            GroupRegion::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
