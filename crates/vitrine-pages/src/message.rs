//! Dismissible page banner

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
	Success,
	Error,
}

/// A dismissible banner shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
	pub kind: MessageKind,
	pub text: String,
}

impl Message {
	pub fn success(text: impl Into<String>) -> Self {
		Self {
			kind: MessageKind::Success,
			text: text.into(),
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			kind: MessageKind::Error,
			text: text.into(),
		}
	}

	pub fn is_error(&self) -> bool {
		self.kind == MessageKind::Error
	}
}
