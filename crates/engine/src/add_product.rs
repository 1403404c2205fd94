//! Add-product workflow for a collection's product list.
//!
//! The workflow is a two-phase state machine. `Idle` accepts edits and
//! submissions; `Submitting` holds while the backend call is outstanding and
//! rejects further submissions, which is the only guard against duplicate
//! requests. Validation failures never leave `Idle` and never reach the
//! backend. Both outcomes of a submission end in an alert and a return to
//! `Idle`; the input is cleared only on success.
//!
//! Callers that run the request elsewhere (the TUI spawns it on the tokio
//! runtime) use [`AddProductWorkflow::begin_submit`] and
//! [`AddProductWorkflow::finish`]. Callers that can simply await use
//! [`AddProductWorkflow::submit`].

use std::fmt::Display;

use storedesk_api::CollectionService;
use storedesk_types::{CollectionId, ProductId, Severity};
use thiserror::Error;
use tracing::{error, info};

use crate::alert::AlertState;
use crate::product_id::{ProductIdInput, ValidationError, validate_product_id};

/// Generic message shown for any backend failure.
pub const ADD_PRODUCT_FAILED: &str = "Failed to add product to the collection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddPhase {
    #[default]
    Idle,
    Submitting,
}

/// A validated mutation ready to be delegated to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProductRequest {
    pub collection_id: CollectionId,
    pub product_id: ProductId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("an add-product request is already in flight")]
    InFlight,
}

/// How a full [`AddProductWorkflow::submit`] cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Rejected locally; no request was issued.
    Rejected(SubmitError),
    /// The backend accepted the product and returned this message.
    Added(String),
    /// The backend call failed; the generic failure alert is showing.
    Failed,
}

#[derive(Debug, Clone)]
pub struct AddProductWorkflow {
    collection_id: CollectionId,
    input: ProductIdInput,
    phase: AddPhase,
    alert: AlertState,
}

impl AddProductWorkflow {
    pub fn new(collection_id: CollectionId) -> Self {
        Self {
            collection_id,
            input: ProductIdInput::new(),
            phase: AddPhase::Idle,
            alert: AlertState::default(),
        }
    }

    pub fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    pub fn input(&self) -> &ProductIdInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProductIdInput {
        &mut self.input
    }

    pub fn phase(&self) -> AddPhase {
        self.phase
    }

    /// Whether the add affordance should render as disabled with a spinner.
    pub fn is_submitting(&self) -> bool {
        self.phase == AddPhase::Submitting
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn alert_mut(&mut self) -> &mut AlertState {
        &mut self.alert
    }

    /// Validate the current input and, if it passes, enter `Submitting`.
    ///
    /// Validation failures raise an alert with the validator's message and
    /// leave the workflow `Idle`. A call while already `Submitting` is
    /// ignored and reported as [`SubmitError::InFlight`].
    pub fn begin_submit(&mut self) -> Result<AddProductRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let product_id = match validate_product_id(self.input.value()) {
            Ok(product_id) => product_id,
            Err(validation_error) => {
                self.alert.show(validation_error.to_string(), Severity::Warning);
                return Err(validation_error.into());
            }
        };
        self.phase = AddPhase::Submitting;
        Ok(AddProductRequest {
            collection_id: self.collection_id.clone(),
            product_id,
        })
    }

    /// Resolve an outstanding submission and return to `Idle`.
    pub fn finish<E: Display>(&mut self, outcome: Result<String, E>) -> AddOutcome {
        self.phase = AddPhase::Idle;
        match outcome {
            Ok(message) => {
                info!(collection_id = %self.collection_id, %message, "product added to collection");
                self.alert.show(message.clone(), Severity::Success);
                self.input.clear();
                AddOutcome::Added(message)
            }
            Err(cause) => {
                error!(collection_id = %self.collection_id, error = %cause, "Error adding product");
                self.alert.show(ADD_PRODUCT_FAILED, Severity::Error);
                AddOutcome::Failed
            }
        }
    }

    /// Validate, delegate exactly one call to `service`, and resolve.
    pub async fn submit(&mut self, service: &dyn CollectionService) -> AddOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(submit_error) => return AddOutcome::Rejected(submit_error),
        };
        let outcome = service.add_product(&request.collection_id, &request.product_id).await;
        self.finish(outcome)
    }
}
