use crate::domain::model::{SelectItem, WorkspaceId};
use serde::Serialize;
use std::fmt;

pub const SELECT_PLACEHOLDER: &str = "Select a workspace";
pub const CONFIRM_TEXT: &str = "Confirm transfer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceSelector {
    pub placeholder: String,
    pub items: Vec<SelectItem>,
    pub selected: Option<WorkspaceId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub text: String,
    pub disabled: bool,
    pub loading: bool,
}

/// 渲染後的對話框內容（與 UI 框架無關）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferDialog {
    pub show: bool,
    pub logo: String,
    pub title: String,
    pub description: String,
    pub selector: WorkspaceSelector,
    pub button: SubmitButton,
}

impl fmt::Display for TransferDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        for item in &self.selector.items {
            let marker = match &self.selector.selected {
                Some(selected) if *selected == item.id => "(x)",
                _ if item.disabled => " - ",
                _ => "( )",
            };
            write!(f, "  {} {} [{}]", marker, item.value, item.id)?;
            if !item.label.is_empty() {
                write!(f, " {}", item.label)?;
            }
            writeln!(f)?;
        }
        if self.selector.items.is_empty() {
            writeln!(f, "  {}", self.selector.placeholder)?;
        }

        writeln!(f)?;
        let state = if self.button.loading {
            " (loading)"
        } else if self.button.disabled {
            " (disabled)"
        } else {
            ""
        };
        write!(f, "[{}]{}", self.button.text, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Workspace, WorkspaceId};

    #[test]
    fn test_display_marks_current_and_selected() {
        let current = WorkspaceId::from("ws_1");
        let dialog = TransferDialog {
            show: true,
            logo: String::new(),
            title: "Transfer acme.com".to_string(),
            description: "desc".to_string(),
            selector: WorkspaceSelector {
                placeholder: SELECT_PLACEHOLDER.to_string(),
                items: vec![
                    SelectItem::from_workspace(&Workspace::new("ws_1", "Acme"), &current),
                    SelectItem::from_workspace(&Workspace::new("ws_2", "Beta"), &current),
                ],
                selected: Some(WorkspaceId::from("ws_2")),
            },
            button: SubmitButton {
                text: CONFIRM_TEXT.to_string(),
                disabled: false,
                loading: false,
            },
        };

        let text = dialog.to_string();
        assert!(text.contains(" -  Acme [ws_1] Current"));
        assert!(text.contains("(x) Beta [ws_2]"));
        assert!(text.ends_with("[Confirm transfer]"));
    }
}
