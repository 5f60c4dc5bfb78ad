//! Route registry: URL paths, labels, and the view each path renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paths are the bookmark contract with end users, so the table is validated
//! as a whole before anything renders. The server validates it at startup and
//! refuses to serve a table with colliding paths or view bindings.
//!
//! DESIGN
//! ======
//! Matching is exact on the normalized path. Table order only matters for
//! navigation menus; breadcrumbs are derived from registered path prefixes.


mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use table::STANDARD_ROUTES;

/// Every view unit reachable from the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Home,
    ViewProfile,
    ProfileSettings,
    Users,
    AddUser,
    EditUser,
    ViewUser,
    ViewBec,
    Groups,
    EditGroup,
    ViewGroup,
    Roles,
    OffboardingWizard,
    Devices,
    MfaReport,
    BasicAuthReport,
    Tenants,
    EditTenant,
    Domains,
    ConditionalAccess,
    ListAppliedStandards,
    ApplyStandard,
    BestPracticeAnalyser,
    DomainsAnalyser,
    IndividualDomainCheck,
    ApplicationsList,
    EditMemApplication,
    AddChocoApp,
    AutopilotAddDevice,
    AutopilotAddProfile,
    AutopilotAddStatusPage,
    AutopilotListDevices,
    AutopilotListProfiles,
    AutopilotListStatusPages,
    EditAutopilotProfile,
    EditAutopilotStatusPage,
    MemListPolicies,
    MemEditPolicy,
    MemCaPolicies,
    MemAddPolicy,
    AddPolicyTemplate,
    MemListTemplates,
    ListDefender,
    OneDriveList,
    SharepointList,
    BusinessVoice,
    TeamsList,
    TeamsAdd,
    TeamsSettings,
    TeamsActivity,
    ContactsList,
    EditContact,
    EditMailboxPermissions,
    ViewMobileDevices,
    MailboxesList,
    MailboxStatistics,
    MailboxCasSettings,
    MessageTrace,
    PhishingPolicies,
    ListAlerts,
    ConsoleSettings,
}

/// What a registered path does when navigated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Breadcrumb/menu parent; renders no content.
    Group,
    View(ViewKey),
    /// Legacy alias for another registered view path.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub const fn group(path: &'static str, label: &'static str) -> Self {
        Self { path, label, target: RouteTarget::Group }
    }

    pub const fn view(path: &'static str, label: &'static str, key: ViewKey) -> Self {
        Self { path, label, target: RouteTarget::View(key) }
    }

    pub const fn redirect(path: &'static str, label: &'static str, to: &'static str) -> Self {
        Self { path, label, target: RouteTarget::Redirect(to) }
    }

    pub fn view_key(&self) -> Option<ViewKey> {
        match self.target {
            RouteTarget::View(key) => Some(key),
            RouteTarget::Group | RouteTarget::Redirect(_) => None,
        }
    }
}

/// Result of resolving a location path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    View { entry: RouteEntry, key: ViewKey },
    Group { entry: RouteEntry },
    Redirect { to: &'static str },
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub path: &'static str,
    pub label: &'static str,
}

/// One top-level menu section and the views beneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub entry: RouteEntry,
    pub links: Vec<RouteEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid route path '{path}'")]
    InvalidPath { path: &'static str },

    #[error("duplicate route path '{path}' ('{first}' and '{second}')")]
    DuplicatePath {
        path: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("view {view:?} bound to both '{first}' and '{second}'")]
    DuplicateView {
        view: ViewKey,
        first: &'static str,
        second: &'static str,
    },

    #[error("redirect '{path}' points at '{to}', which is not a registered view")]
    DanglingRedirect { path: &'static str, to: &'static str },
}

/// Validated, indexed route table.
#[derive(Clone, Debug)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
    by_path: HashMap<&'static str, usize>,
}

impl RouteRegistry {
    /// Validate and index `entries`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first malformed path, duplicate path, duplicate view
    /// binding, or redirect whose target is not a registered view.
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, RegistryError> {
        let entries: Vec<RouteEntry> = entries.into_iter().collect();
        let mut by_path = HashMap::with_capacity(entries.len());
        let mut by_view: HashMap<ViewKey, &'static str> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if !is_valid_path(entry.path) {
                return Err(RegistryError::InvalidPath { path: entry.path });
            }
            if let Some(&prev) = by_path.get(entry.path) {
                let first: &RouteEntry = &entries[prev];
                return Err(RegistryError::DuplicatePath {
                    path: entry.path,
                    first: first.label,
                    second: entry.label,
                });
            }
            if let Some(key) = entry.view_key() {
                if let Some(first) = by_view.insert(key, entry.path) {
                    return Err(RegistryError::DuplicateView { view: key, first, second: entry.path });
                }
            }
            by_path.insert(entry.path, idx);
        }

        for entry in &entries {
            if let RouteTarget::Redirect(to) = entry.target {
                let lands_on_view = by_path
                    .get(to)
                    .is_some_and(|&idx| entries[idx].view_key().is_some());
                if !lands_on_view {
                    return Err(RegistryError::DanglingRedirect { path: entry.path, to });
                }
            }
        }

        Ok(Self { entries, by_path })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup after normalization.
    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.by_path.get(normalize(path)).map(|&idx| &self.entries[idx])
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        let Some(entry) = self.get(path) else {
            return Resolution::NotFound;
        };
        match entry.target {
            RouteTarget::View(key) => Resolution::View { entry: *entry, key },
            RouteTarget::Group => Resolution::Group { entry: *entry },
            RouteTarget::Redirect(to) => Resolution::Redirect { to },
        }
    }

    /// Labels of every registered prefix of `path`, outermost first.
    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        let path = normalize(path);
        let prefixes = path
            .match_indices('/')
            .skip(1)
            .map(|(idx, _)| &path[..idx])
            .chain(std::iter::once(path));

        prefixes
            .filter_map(|prefix| self.by_path.get(prefix).map(|&idx| &self.entries[idx]))
            .filter(|entry| !matches!(entry.target, RouteTarget::Redirect(_)))
            .map(|entry| Breadcrumb { path: entry.path, label: entry.label })
            .collect()
    }

    /// Navigation menu: each top-level entry with the views below it.
    pub fn sections(&self) -> Vec<NavSection> {
        self.entries
            .iter()
            .filter(|entry| is_top_level(entry.path) && !matches!(entry.target, RouteTarget::Redirect(_)))
            .map(|section| {
                let prefix = format!("{}/", section.path);
                let links = self
                    .entries
                    .iter()
                    .filter(|entry| entry.path.starts_with(&prefix) && entry.view_key().is_some())
                    .copied()
                    .collect();
                NavSection { entry: *section, links }
            })
            .collect()
    }
}

static STANDARD: LazyLock<Result<RouteRegistry, RegistryError>> =
    LazyLock::new(|| RouteRegistry::new(STANDARD_ROUTES.iter().copied()));

/// The console's route table, validated on first use.
///
/// # Errors
///
/// Returns the validation error if the table is inconsistent.
pub fn registry() -> Result<&'static RouteRegistry, RegistryError> {
    STANDARD.as_ref().map_err(Clone::clone)
}

/// Strip query/fragment and trailing slashes; the root stays `/`.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn is_valid_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    rest.split('/')
        .all(|segment| !segment.is_empty() && !segment.contains(['?', '#', ' ']))
}

fn is_top_level(path: &str) -> bool {
    path != "/" && path.matches('/').count() == 1
}
