//! Sheet state definitions.

/// The logical state of a sheet. There is no intermediate state; partially
/// open positions only exist visually, during a drag or a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetPosition {
    Open,
    Closed,
}

impl SheetPosition {
    pub fn is_open(self) -> bool {
        self == SheetPosition::Open
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            SheetPosition::Open => SheetPosition::Closed,
            SheetPosition::Closed => SheetPosition::Open,
        }
    }
}

impl From<bool> for SheetPosition {
    fn from(is_open: bool) -> Self {
        if is_open {
            SheetPosition::Open
        } else {
            SheetPosition::Closed
        }
    }
}

/// What made the sheet change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// A drag that ended past the snap threshold.
    Drag,
    /// A tap on the indicator handle.
    IndicatorTap,
}

/// A state change the sheet wrote to the caller's flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetChange {
    /// New state.
    pub position: SheetPosition,
    pub cause: ChangeCause,
}

impl SheetChange {
    pub fn is_open(&self) -> bool {
        self.position.is_open()
    }
}
