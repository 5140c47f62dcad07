use crate::core::modal::ModalController;
use crate::core::view::{
    SubmitButton, TransferDialog, WorkspaceSelector, CONFIRM_TEXT, SELECT_PLACEHOLDER,
};
use crate::domain::model::{CacheKey, Domain, SelectItem, WorkspaceContext, WorkspaceId, APP_NAME};
use crate::domain::ports::{CacheInvalidator, Notifier, TransferApi};
use crate::utils::error::{Result, TransferError, GENERIC_TRANSFER_FAILURE};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const DOMAINS_CACHE_PREFIX: &str = "/api/domains";
pub const PENDING_MESSAGE: &str = "Transferring domain...";
pub const SUCCESS_MESSAGE: &str =
    "Domain transfer initiated. We'll send you an email once it's complete.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub selection: Option<WorkspaceId>,
    pub status: FormStatus,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// 伺服器已接受轉移；`invalidated` 為被標記 stale 的快取數量
    Transferred { invalidated: usize },
    Failed(TransferError),
    NoSelection,
    AlreadySubmitting,
}

impl SubmitOutcome {
    pub fn is_transferred(&self) -> bool {
        matches!(self, SubmitOutcome::Transferred { .. })
    }

    /// 是否真的送出了請求
    pub fn dispatched(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Transferred { .. } | SubmitOutcome::Failed(_)
        )
    }
}

/// 網域列表相關的快取 key（只比對字串 key）
pub fn is_domain_listing(key: &CacheKey) -> bool {
    key.as_path()
        .is_some_and(|path| path.starts_with(DOMAINS_CACHE_PREFIX))
}

/// 一次送出週期的守衛：離開 `submit` 時（包含 future 被 drop）把狀態還原成 Idle，
/// 尚未回報結果時補上一次 `on_error`
struct SubmitCycle<'a> {
    form: &'a TransferForm,
    notifier: &'a dyn Notifier,
    resolved: bool,
}

impl Drop for SubmitCycle<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            tracing::warn!(
                "Transfer of {} was dropped before it resolved",
                self.form.domain.slug
            );
            self.notifier.on_error(GENERIC_TRANSFER_FAILURE);
        }
        self.form.state().status = FormStatus::Idle;
    }
}

pub struct TransferForm {
    domain: Domain,
    context: WorkspaceContext,
    modal: ModalController,
    state: Mutex<FormState>,
}

impl TransferForm {
    pub fn new(domain: Domain, context: WorkspaceContext, modal: ModalController) -> Self {
        Self {
            domain,
            context,
            modal,
            state: Mutex::new(FormState::default()),
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn context(&self) -> &WorkspaceContext {
        &self.context
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> FormState {
        self.state().clone()
    }

    pub fn items(&self) -> Vec<SelectItem> {
        self.context.items()
    }

    /// 選擇目的地 workspace；目前的 workspace 與未知 id 都不接受
    pub fn select(&self, id: &WorkspaceId) -> Result<()> {
        let workspace = self
            .context
            .find(id)
            .ok_or_else(|| TransferError::ValidationError {
                message: format!("Workspace {} is not one of your workspaces", id),
            })?;

        if workspace.id == self.context.current {
            return Err(TransferError::ValidationError {
                message: format!("{} is the current workspace", workspace.name),
            });
        }

        tracing::debug!("Selected destination workspace {}", workspace.id);
        self.state().selection = Some(workspace.id.clone());
        Ok(())
    }

    pub fn clear_selection(&self) {
        self.state().selection = None;
    }

    pub fn can_submit(&self) -> bool {
        let state = self.state();
        state.selection.is_some() && state.status == FormStatus::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.state().status == FormStatus::Submitting
    }

    pub fn render(&self) -> TransferDialog {
        let state = self.snapshot();
        TransferDialog {
            show: self.modal.is_open(),
            logo: self.domain.logo_url(),
            title: format!("Transfer {}", self.domain.slug),
            description: format!(
                "Transfer this domain and its links to another {} workspace. Link tags will not be transferred.",
                APP_NAME
            ),
            selector: WorkspaceSelector {
                placeholder: SELECT_PLACEHOLDER.to_string(),
                items: self.items(),
                selected: state.selection.clone(),
            },
            button: SubmitButton {
                text: CONFIRM_TEXT.to_string(),
                disabled: state.selection.is_none(),
                loading: state.status == FormStatus::Submitting,
            },
        }
    }

    /// 送出轉移。同一個表單同時只會有一個請求在途中。
    pub async fn submit(
        &self,
        api: &dyn TransferApi,
        cache: &dyn CacheInvalidator,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        let new_workspace = {
            let mut state = self.state();
            if state.status == FormStatus::Submitting {
                tracing::debug!("Transfer of {} already in flight, ignoring submit", self.domain.slug);
                return SubmitOutcome::AlreadySubmitting;
            }
            let Some(selection) = state.selection.clone() else {
                return SubmitOutcome::NoSelection;
            };
            state.status = FormStatus::Submitting;
            selection
        };
        let mut cycle = SubmitCycle {
            form: self,
            notifier,
            resolved: false,
        };

        tracing::info!(
            "Transferring {} from {} to {}",
            self.domain.slug,
            self.context.current,
            new_workspace
        );
        notifier.on_pending(PENDING_MESSAGE);

        let result = api
            .transfer(&self.domain, &self.context.current, &new_workspace)
            .await;

        let outcome = match result {
            Ok(()) => {
                let invalidated = cache.invalidate(&is_domain_listing);
                self.modal.close();
                tracing::info!(
                    "Transfer of {} initiated, {} cached entries marked stale",
                    self.domain.slug,
                    invalidated
                );
                cycle.resolved = true;
                notifier.on_success(SUCCESS_MESSAGE);
                SubmitOutcome::Transferred { invalidated }
            }
            Err(e) => {
                tracing::warn!("Transfer of {} failed: {}", self.domain.slug, e);
                cycle.resolved = true;
                notifier.on_error(&e.user_message());
                SubmitOutcome::Failed(e)
            }
        };

        drop(cycle);
        outcome
    }
}
