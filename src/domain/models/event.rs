use tui_textarea::Input;

use super::PanelData;
use super::PanelKind;

pub enum Event {
    GenerationCompleted(Option<String>),
    GenerationFailed(String),
    PanelLoaded(PanelKind, Result<PanelData, String>),
    KeyboardAltDigit(u8),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
