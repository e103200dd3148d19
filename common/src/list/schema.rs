/// A column of a list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Key sent as `ordering` when the column is sortable.
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
}

/// A filter offered in the list toolbar. Without options it is a free text
/// search, otherwise a select over `(value, label)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

impl FilterCategory {
    pub fn is_select(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Static description of a remote list: what can be sorted and filtered, and
/// the defaults used when the URL carries no state.
#[derive(Debug, PartialEq, Eq)]
pub struct ListSchema {
    /// Name used in diagnostics.
    pub name: &'static str,
    pub columns: &'static [Column],
    pub filters: &'static [FilterCategory],
    pub default_sort: &'static str,
    pub default_page_size: u32,
    pub page_sizes: &'static [u32],
}

impl ListSchema {
    /// Returns the canonical static key when `column` is sortable.
    pub fn sortable_column(&self, column: &str) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|c| c.sortable && c.key == column)
            .map(|c| c.key)
    }

    pub fn filter(&self, key: &str) -> Option<&'static FilterCategory> {
        self.filters.iter().find(|f| f.key == key)
    }
}

pub static SOURCES_LIST: ListSchema = ListSchema {
    name: "sources",
    columns: &[
        Column { key: "name", title: "Name", sortable: true },
        Column { key: "connection", title: "Last connected", sortable: true },
        Column { key: "type", title: "Type", sortable: true },
        Column { key: "credentials", title: "Credentials", sortable: true },
        Column { key: "unreachableSystems", title: "Unreachable systems", sortable: true },
        Column { key: "scan", title: "", sortable: false },
    ],
    filters: &[
        FilterCategory {
            key: "search_by_name",
            title: "Name",
            placeholder: "Filter by name",
            options: &[],
        },
        FilterCategory {
            key: "search_credentials_by_name",
            title: "Credential name",
            placeholder: "Filter by credential",
            options: &[],
        },
        FilterCategory {
            key: "source_type",
            title: "Source type",
            placeholder: "Filter by source type",
            options: &[
                ("network", "Network"),
                ("openshift", "OpenShift"),
                ("satellite", "Satellite"),
                ("vcenter", "vCenter"),
            ],
        },
    ],
    default_sort: "name",
    default_page_size: 10,
    page_sizes: &[10, 20, 50, 100],
};

pub static CREDENTIALS_LIST: ListSchema = ListSchema {
    name: "credentials",
    columns: &[
        Column { key: "name", title: "Name", sortable: true },
        Column { key: "cred_type", title: "Type", sortable: true },
    ],
    filters: &[
        FilterCategory {
            key: "search_by_name",
            title: "Name",
            placeholder: "Filter by name",
            options: &[],
        },
        FilterCategory {
            key: "cred_type",
            title: "Credential type",
            placeholder: "Filter by credential type",
            options: &[
                ("network", "Network"),
                ("openshift", "OpenShift"),
                ("satellite", "Satellite"),
                ("vcenter", "vCenter"),
                ("ansible", "Ansible"),
                ("acs", "ACS"),
            ],
        },
    ],
    default_sort: "name",
    default_page_size: 10,
    page_sizes: &[10, 20, 50, 100],
};
