use super::PanelKind;
use super::RequestContext;

pub enum Action {
    FetchPanel(PanelKind),
    GenerateRequest(RequestContext),
}
