// src/session/view.rs

/// Top-level tabs. Closed set; the GUI router matches on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    CaseSearch,
    CourtDataSelection,
    QuickDownload,
    Geographical,
}

impl View {
    pub const ALL: [View; 4] = [
        View::CaseSearch,
        View::CourtDataSelection,
        View::QuickDownload,
        View::Geographical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::CaseSearch => "Case Search",
            View::CourtDataSelection => "Court Data",
            View::QuickDownload => "Quick Downloads",
            View::Geographical => "Geographical Data",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServerStatus {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline,
}

impl ServerStatus {
    pub fn label(self) -> &'static str {
        match self {
            ServerStatus::Unknown => "Test Connection",
            ServerStatus::Checking => "Checking…",
            ServerStatus::Online => "Server Online",
            ServerStatus::Offline => "Server Offline",
        }
    }
}
