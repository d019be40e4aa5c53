// crates/mfa-gate-core/src/runtime/provider.rs
// ============================================================================
// Module: Multifactor Provider
// Description: Immutable MFA provider value combining settings and collaborators.
// Purpose: Construct providers once at setup and share them across requests.
// Dependencies: crate::{audit, core, interfaces}
// ============================================================================

//! ## Overview
//! A [`MultifactorProvider`] is built once during setup, either from raw
//! settings through [`MultifactorProviderBuilder`] or from typed
//! [`ProviderSettings`], and is never mutated afterwards. It holds no interior
//! mutability, so it is `Send + Sync` and can be evaluated concurrently by
//! every login request behind an `Arc`.
//!
//! Selection lives in [`crate::runtime::selector`] and availability in
//! [`crate::runtime::availability`]; this module owns construction and
//! identity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

use crate::audit::GateAuditSink;
use crate::audit::NoopAuditSink;
use crate::core::ConfigurationError;
use crate::core::FailureMode;
use crate::core::IdentifierPattern;
use crate::core::ProviderDescriptor;
use crate::core::ProviderSettings;
use crate::interfaces::BypassEvaluator;
use crate::interfaces::ProviderHooks;
use crate::runtime::matcher::matches_identifier;

// ============================================================================
// SECTION: Provider
// ============================================================================

/// Configured MFA provider, generic over the opaque authentication state `A`.
///
/// # Invariants
/// - Equality and hashing cover `(order, id)` only, across provider kinds.
/// - No field changes after construction.
pub struct MultifactorProvider<A: ?Sized> {
    /// Identity and policy settings.
    descriptor: ProviderDescriptor,
    /// Kind-specific eligibility predicate and probe.
    hooks: Box<dyn ProviderHooks<A>>,
    /// Optional bypass capability; absent means never bypass.
    bypass: Option<Arc<dyn BypassEvaluator<A>>>,
    /// Audit sink for selection and availability decisions.
    audit: Arc<dyn GateAuditSink>,
}

impl<A: ?Sized> MultifactorProvider<A> {
    /// Creates a provider from typed settings.
    #[must_use]
    pub fn new<H>(hooks: H, settings: ProviderSettings) -> Self
    where
        H: ProviderHooks<A> + 'static,
    {
        let descriptor = ProviderDescriptor::new(hooks.kind(), settings);
        Self {
            descriptor,
            hooks: Box::new(hooks),
            bypass: None,
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Starts a builder that parses raw settings at [`MultifactorProviderBuilder::build`].
    #[must_use]
    pub fn builder<H>(hooks: H) -> MultifactorProviderBuilder<A>
    where
        H: ProviderHooks<A> + 'static,
    {
        MultifactorProviderBuilder {
            hooks: Box::new(hooks),
            id: None,
            order: 0,
            global_failure_mode: None,
            bypass: None,
            audit: None,
        }
    }

    /// Returns the provider with a bypass capability attached.
    #[must_use]
    pub fn with_bypass_evaluator(mut self, bypass: Arc<dyn BypassEvaluator<A>>) -> Self {
        self.bypass = Some(bypass);
        self
    }

    /// Returns the provider with an audit sink attached.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn GateAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the provider descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    /// Returns the identifier pattern.
    #[must_use]
    pub const fn id(&self) -> &IdentifierPattern {
        self.descriptor.id()
    }

    /// Returns the provider order.
    #[must_use]
    pub const fn order(&self) -> i32 {
        self.descriptor.order()
    }

    /// Returns the provider-wide default failure mode, if configured.
    #[must_use]
    pub const fn global_failure_mode(&self) -> Option<FailureMode> {
        self.descriptor.global_failure_mode()
    }

    /// Returns the concrete provider kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.descriptor.kind()
    }

    /// Returns true when a bypass capability is configured.
    #[must_use]
    pub const fn has_bypass_evaluator(&self) -> bool {
        self.bypass.is_some()
    }

    /// Returns true when the identifier is governed by this provider.
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        matches_identifier(self.descriptor.id(), Some(identifier))
    }

    /// Returns the kind-specific hooks.
    pub(crate) fn hooks(&self) -> &dyn ProviderHooks<A> {
        self.hooks.as_ref()
    }

    /// Returns the bypass capability, if configured.
    pub(crate) fn bypass_evaluator(&self) -> Option<&dyn BypassEvaluator<A>> {
        self.bypass.as_deref()
    }

    /// Returns the audit sink.
    pub(crate) fn audit(&self) -> &dyn GateAuditSink {
        self.audit.as_ref()
    }
}

impl<A: ?Sized> PartialEq for MultifactorProvider<A> {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor
    }
}

impl<A: ?Sized> Eq for MultifactorProvider<A> {}

impl<A: ?Sized> Hash for MultifactorProvider<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptor.hash(state);
    }
}

impl<A: ?Sized> fmt::Display for MultifactorProvider<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor.kind())
    }
}

impl<A: ?Sized> fmt::Debug for MultifactorProvider<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultifactorProvider")
            .field("kind", &self.descriptor.kind())
            .field("id", &self.descriptor.id().as_str())
            .field("order", &self.descriptor.order())
            .field("global_failure_mode", &self.descriptor.global_failure_mode())
            .field("bypass", &self.bypass.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Setup-phase builder accepting raw provider settings.
pub struct MultifactorProviderBuilder<A: ?Sized> {
    /// Kind-specific hooks.
    hooks: Box<dyn ProviderHooks<A>>,
    /// Raw identifier pattern.
    id: Option<String>,
    /// Provider order.
    order: i32,
    /// Raw global failure mode text.
    global_failure_mode: Option<String>,
    /// Optional bypass capability.
    bypass: Option<Arc<dyn BypassEvaluator<A>>>,
    /// Optional audit sink.
    audit: Option<Arc<dyn GateAuditSink>>,
}

impl<A: ?Sized> MultifactorProviderBuilder<A> {
    /// Sets the identifier pattern.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the provider order.
    #[must_use]
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets the provider-wide default failure mode as free text.
    #[must_use]
    pub fn global_failure_mode(mut self, mode: impl Into<String>) -> Self {
        self.global_failure_mode = Some(mode.into());
        self
    }

    /// Attaches a bypass capability.
    #[must_use]
    pub fn bypass_evaluator(mut self, bypass: Arc<dyn BypassEvaluator<A>>) -> Self {
        self.bypass = Some(bypass);
        self
    }

    /// Attaches an audit sink.
    #[must_use]
    pub fn audit_sink(mut self, audit: Arc<dyn GateAuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Parses the raw settings and builds the immutable provider.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the identifier is missing or
    /// invalid, or the global failure mode is unknown.
    pub fn build(self) -> Result<MultifactorProvider<A>, ConfigurationError> {
        let id = self.id.ok_or(ConfigurationError::MissingIdentifier)?;
        let settings =
            ProviderSettings::parse(&id, self.order, self.global_failure_mode.as_deref())?;
        let descriptor = ProviderDescriptor::new(self.hooks.kind(), settings);
        let audit: Arc<dyn GateAuditSink> = match self.audit {
            Some(audit) => audit,
            None => Arc::new(NoopAuditSink),
        };
        Ok(MultifactorProvider {
            descriptor,
            hooks: self.hooks,
            bypass: self.bypass,
            audit,
        })
    }
}
