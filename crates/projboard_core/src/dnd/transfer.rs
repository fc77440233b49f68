//! Drag data transfer channel and payload codec.

use crate::model::project::ProjectId;

/// The only payload type the board produces or accepts.
pub const TEXT_PLAIN: &str = "text/plain";

/// Drag operation effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    None,
    Copy,
    Move,
    Link,
    All,
}

impl DragEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
            Self::All => "all",
        }
    }
}

/// Data carried by one drag gesture.
///
/// Items keep insertion order so `types()` reports them as declared;
/// setting an existing type replaces its data in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    effect_allowed: DragEffect,
    drop_effect: DragEffect,
}

impl Default for DataTransfer {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            effect_allowed: DragEffect::All,
            drop_effect: DragEffect::None,
        }
    }
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, mime: &str, data: impl Into<String>) {
        let data = data.into();
        match self.items.iter_mut().find(|(kind, _)| kind == mime) {
            Some(item) => item.1 = data,
            None => self.items.push((mime.to_string(), data)),
        }
    }

    pub fn get_data(&self, mime: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(kind, _)| kind == mime)
            .map(|(_, data)| data.as_str())
    }

    /// Declared payload types in declaration order.
    pub fn types(&self) -> Vec<&str> {
        self.items.iter().map(|(kind, _)| kind.as_str()).collect()
    }

    pub fn effect_allowed(&self) -> DragEffect {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DragEffect) {
        self.effect_allowed = effect;
    }

    /// Effect the platform applied; `None` means the gesture was cancelled.
    pub fn drop_effect(&self) -> DragEffect {
        self.drop_effect
    }

    pub fn set_drop_effect(&mut self, effect: DragEffect) {
        self.drop_effect = effect;
    }
}

/// One drag event as delivered to a source or target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragEvent {
    data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// Event without a data channel, e.g. synthesized by the host.
    pub fn without_data() -> Self {
        Self::default()
    }

    pub fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    pub fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    pub fn into_data_transfer(self) -> Option<DataTransfer> {
        self.data_transfer
    }

    /// Marks the event as handled; on drag-over this is what makes a drop
    /// possible.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Writes `id` as the drag payload and restricts the gesture to `move`.
pub fn encode_payload(transfer: &mut DataTransfer, id: &str) {
    transfer.set_data(TEXT_PLAIN, id);
    transfer.set_effect_allowed(DragEffect::Move);
}

/// Reads the project id back from a drag payload.
///
/// Returns `None` when no `text/plain` item is present.
pub fn decode_payload(transfer: &DataTransfer) -> Option<ProjectId> {
    transfer.get_data(TEXT_PLAIN).map(str::to_string)
}

/// Returns whether a target should accept this payload: the first declared
/// type must be `text/plain`.
pub fn accepts_payload(transfer: &DataTransfer) -> bool {
    transfer.types().first() == Some(&TEXT_PLAIN)
}
