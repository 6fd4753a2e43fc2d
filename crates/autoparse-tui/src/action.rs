/// Actions that the TUI can process, mapped from keyboard input or internal events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Esc: close the topmost overlay.
    NavigateBack,
    /// Enter in the table: select the row under the cursor.
    Select,
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,
    ToggleHelp,
    PickResume,
    PickPanCard,
    PickAadharCard,
    RequestDocuments,
    SubmitDocuments,
    /// Files dropped onto the terminal (delivered as pasted text).
    Drop(String),
    InputChar(char),
    InputText(String),
    InputBackspace,
    /// Enter while typing.
    Confirm,
    /// Ctrl+S in the document request modal.
    Send,
    Tick,
    None,
}
