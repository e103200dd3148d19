use common::detail::DetailTicket;
use common::error::FetchError;
use common::list::Ticket;
use common::model::connection::ConnectionBuckets;
use common::model::page::Page;
use common::model::source::{Source, SourceType};

pub enum Msg {
    Sort(&'static str),
    Filter(String, String),
    ClearFilters,
    SetPage(u32),
    SetPageSize(u32),
    Refresh,
    Loaded(Ticket, Result<Page<Source>, FetchError>),
    ToggleSelected(u64),
    ShowCredentials(u64),
    ShowConnections(u64),
    ConnectionsLoaded(DetailTicket, Result<ConnectionBuckets, FetchError>),
    CloseOverlay,
    OpenAddSource(SourceType),
    CloseAddSource,
    SourceCreated(Source),
    ScanSelected,
    ScanSource(u64),
    Tick,
}
