//! Keys recognized in parameter files.

/// A recognized parameter-file key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ParamKey {
    NumTrees,
    TrainMethod,
    MaxTreeLevels,
    NumCandidateFeats,
    NumCandidateThresh,
    MinGain,
    NumThreads,
    MinLeafSamples,
}

/// Number of keys a file must contain to be valid.
pub const REQUIRED_KEY_COUNT: usize = 7;

impl ParamKey {
    /// Every key, in the order files are written.
    pub(crate) const ALL: [ParamKey; 8] = [
        ParamKey::NumTrees,
        ParamKey::TrainMethod,
        ParamKey::MaxTreeLevels,
        ParamKey::NumCandidateFeats,
        ParamKey::NumCandidateThresh,
        ParamKey::MinGain,
        ParamKey::NumThreads,
        ParamKey::MinLeafSamples,
    ];

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::NumTrees => "NumTrees",
            Self::TrainMethod => "TrainMethod",
            Self::MaxTreeLevels => "MaxTreeLevels",
            Self::NumCandidateFeats => "NumCandidateFeats",
            Self::NumCandidateThresh => "NumCandidateThresh",
            Self::MinGain => "MinGain",
            Self::NumThreads => "NumThreads",
            Self::MinLeafSamples => "MinLeafSamples",
        }
    }

    /// Slot in the required-key table, or `None` for optional keys.
    pub(crate) fn required_slot(self) -> Option<usize> {
        match self {
            Self::MinLeafSamples => None,
            key => Some(key as usize),
        }
    }
}
