/// Channel role codes understood by the DSP media-format parameters.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelRole {
    /// Front left.
    L = 1,
    /// Front right.
    R = 2,
    /// Front center.
    C = 3,
    /// Left side.
    Ls = 4,
    /// Right side.
    Rs = 5,
    /// Low frequency effects.
    Lfe = 6,
    /// Center back.
    Cs = 7,
    /// Left back.
    Lb = 8,
    /// Right back.
    Rb = 9,
}

impl ChannelRole {
    /// Wire code of the role.
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl From<ChannelRole> for u16 {
    fn from(role: ChannelRole) -> Self {
        role.code()
    }
}
