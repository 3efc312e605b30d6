//! Error types for the comparison engine.
//!
//! Only contract violations surface as errors. Missing data and zero baselines
//! are recovered locally by the services (empty vectors, `None` percent change)
//! and never reach this type.

use std::fmt;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Structured context for engine errors.
///
/// Records which operation failed and on what input, so hosts can log
/// a useful message without re-deriving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "parse_date_range", "merge_strict")
    pub operation: Option<String>,
    /// The input involved (e.g., "dateRange", "topPagesVisited")
    pub entity: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity involved.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Paired inputs cannot be zipped index-by-index (empty or unequal arrays,
    /// or merge groups of different lengths in strict mode).
    #[error("Alignment error: {message} {context}")]
    Alignment {
        message: String,
        context: ErrorContext,
    },

    /// Upstream contract violation: malformed date range strings, unknown
    /// locale or granularity identifiers, unreadable configuration.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

impl EngineError {
    /// Create an alignment error.
    pub fn alignment(message: impl Into<String>) -> Self {
        Self::Alignment {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create an alignment error with context.
    pub fn alignment_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Alignment {
            message: message.into(),
            context,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a configuration error with context.
    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Configuration {
            message: message.into(),
            context,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Alignment { context, .. } => context,
            Self::Configuration { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::Alignment { context, .. } | Self::Configuration { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }

    /// Add or update the entity in the error context.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        match &mut self {
            Self::Alignment { context, .. } | Self::Configuration { context, .. } => {
                context.entity = Some(entity.into());
            }
        }
        self
    }

    pub fn is_alignment(&self) -> bool {
        matches!(self, Self::Alignment { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
