use crate::record::RecordId;

/// The dataset that subsequent operations work on, if any.
///
/// The selection only lives in memory; every process starts with
/// [ActiveSelection::Unset].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActiveSelection {
    #[default]
    Unset,
    Set(RecordId),
}

impl ActiveSelection {
    #[inline]
    pub(crate) fn set(&mut self, id: RecordId) {
        *self = Self::Set(id);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        *self = Self::Unset;
    }

    #[inline]
    pub(crate) fn id(&self) -> Option<RecordId> {
        match self {
            Self::Set(id) => Some(*id),
            Self::Unset => None,
        }
    }

    #[inline]
    pub(crate) fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Clears the selection if it refers to `id`. Returns `true` if
    /// the selection was cleared.
    pub(crate) fn release(&mut self, id: RecordId) -> bool {
        if self.id() == Some(id) {
            self.clear();
            return true;
        }

        false
    }
}
