use crate::core::form::TransferForm;
use crate::core::view::TransferDialog;
use crate::domain::model::{Domain, WorkspaceContext};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 對話框的開關狀態。Clone 出來的 handle 共用同一個狀態，
/// 表單成功送出後用它關閉對話框。
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    open: Arc<AtomicBool>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

/// 父 view 掛載的轉移對話框：controller 加上（有 Domain 時才存在的）表單
pub struct TransferDomainModal {
    controller: ModalController,
    form: Option<TransferForm>,
}

impl TransferDomainModal {
    pub fn new(domain: Option<Domain>, context: WorkspaceContext) -> Self {
        let controller = ModalController::new();
        let form = domain.map(|domain| TransferForm::new(domain, context, controller.clone()));
        Self { controller, form }
    }

    pub fn controller(&self) -> &ModalController {
        &self.controller
    }

    pub fn form(&self) -> Option<&TransferForm> {
        self.form.as_ref()
    }

    pub fn open(&self) {
        self.controller.open();
    }

    pub fn close(&self) {
        self.controller.close();
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// 沒有 Domain 時不產生任何對話框
    pub fn render(&self) -> Option<TransferDialog> {
        self.form.as_ref().map(TransferForm::render)
    }
}
