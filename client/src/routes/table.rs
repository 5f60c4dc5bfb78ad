//! The console's route table.
//!
//! Renaming a path breaks saved links; add a `redirect` entry instead.

use super::RouteEntry as R;
use super::ViewKey as V;

pub const STANDARD_ROUTES: &[R] = &[
    R::redirect("/", "Home", "/home"),
    R::view("/home", "Home", V::Home),
    R::group("/profile", "Profile"),
    R::view("/profile/view", "View", V::ViewProfile),
    R::view("/profile/settings", "Settings", V::ProfileSettings),
    // Identity
    R::group("/identity", "Identity"),
    R::group("/identity/administration", "Administration"),
    R::view("/identity/administration/users", "Users", V::Users),
    R::view("/identity/administration/users/add", "Add User", V::AddUser),
    R::view("/identity/administration/users/edit", "Edit User", V::EditUser),
    R::view("/identity/administration/users/view", "View User", V::ViewUser),
    R::view("/identity/administration/ViewBec", "View BEC", V::ViewBec),
    R::view("/identity/administration/groups", "Groups", V::Groups),
    R::view("/identity/administration/groups/edit", "Edit Group", V::EditGroup),
    R::view("/identity/administration/groups/view", "View Group", V::ViewGroup),
    R::view("/identity/administration/roles", "Roles", V::Roles),
    R::view(
        "/identity/administration/offboarding-wizard",
        "Offboarding Wizard",
        V::OffboardingWizard,
    ),
    R::group("/identity/reports", "Reports"),
    R::view("/identity/reports/devices", "Devices", V::Devices),
    R::view("/identity/reports/mfa-report", "MFA Report", V::MfaReport),
    R::view("/identity/reports/basic-auth-report", "Basic Auth Report", V::BasicAuthReport),
    // Tenant
    R::group("/tenant", "Tenant"),
    R::group("/tenant/administration", "Administration"),
    R::view("/tenant/administration/tenants", "Tenants", V::Tenants),
    R::view("/tenant/administration/tenants/edit", "Edit Tenant", V::EditTenant),
    R::view("/tenant/administration/domains", "Domains", V::Domains),
    R::view(
        "/tenant/administration/conditional-access-policies",
        "Conditional Access",
        V::ConditionalAccess,
    ),
    R::group("/tenant/standards", "Standards"),
    R::view(
        "/tenant/standards/list-applied-standards",
        "List Applied Standards",
        V::ListAppliedStandards,
    ),
    R::view("/tenant/standards/apply-standard", "Apply Standard", V::ApplyStandard),
    R::view("/tenant/standards/bpa-report", "Best Practice Report", V::BestPracticeAnalyser),
    R::view("/tenant/standards/domains-analyser", "Domains Analyser", V::DomainsAnalyser),
    R::view(
        "/tenant/standards/individual-domains",
        "Individual Domain Check",
        V::IndividualDomainCheck,
    ),
    R::redirect("/tenant/standards/alert-list", "Alert List", "/security/reports/list-alerts"),
    // Endpoint
    R::group("/endpoint", "Endpoint"),
    R::group("/endpoint/applications", "Applications"),
    R::view("/endpoint/applications/list", "List", V::ApplicationsList),
    R::view(
        "/endpoint/applications/edit-mem-application",
        "Edit Endpoint Manager Application",
        V::EditMemApplication,
    ),
    R::view("/endpoint/applications/add-choco-app", "Add Choco App", V::AddChocoApp),
    R::group("/endpoint/autopilot", "Autopilot"),
    R::view("/endpoint/autopilot/add-device", "Add Device", V::AutopilotAddDevice),
    R::view("/endpoint/autopilot/add-profile", "Add Profile", V::AutopilotAddProfile),
    R::view("/endpoint/autopilot/add-status-page", "Add Status Page", V::AutopilotAddStatusPage),
    R::view("/endpoint/autopilot/list-devices", "List Devices", V::AutopilotListDevices),
    R::view("/endpoint/autopilot/list-profiles", "List Profiles", V::AutopilotListProfiles),
    R::view(
        "/endpoint/autopilot/list-status-pages",
        "List Status Pages",
        V::AutopilotListStatusPages,
    ),
    R::view(
        "/endpoint/autopilot/edit-autopilot-profiles",
        "Edit Autopilot Profiles",
        V::EditAutopilotProfile,
    ),
    R::view(
        "/endpoint/autopilot/edit-autopilot-status-page",
        "Edit Autopilot Status Page",
        V::EditAutopilotStatusPage,
    ),
    R::group("/endpoint/MEM", "MEM"),
    R::view("/endpoint/MEM/list-policies", "List Policies", V::MemListPolicies),
    R::view("/endpoint/MEM/edit-policy", "Edit MEM Policy", V::MemEditPolicy),
    R::view("/endpoint/MEM/ca-policies", "List CA Policies", V::MemCaPolicies),
    R::view("/endpoint/MEM/add-policy", "Add Intune Policy", V::MemAddPolicy),
    R::view(
        "/endpoint/MEM/add-policy-template",
        "Add Endpoint Manager Policy Template",
        V::AddPolicyTemplate,
    ),
    R::view("/endpoint/MEM/list-templates", "List Intune Policy Template", V::MemListTemplates),
    R::view("/endpoint/defender/list-defender", "List Defender", V::ListDefender),
    // Teams & Sharepoint
    R::group("/teams-share", "Teams & Sharepoint"),
    R::group("/teams-share/onedrive", "OneDrive"),
    R::view("/teams-share/onedrive/list", "List OneDrive", V::OneDriveList),
    R::group("/teams-share/sharepoint", "Sharepoint"),
    R::view("/teams-share/sharepoint/list-sharepoint", "List Sharepoint", V::SharepointList),
    R::group("/teams-share/teams", "Teams"),
    R::view("/teams-share/teams/list-team", "List Teams", V::TeamsList),
    R::view("/teams-share/teams/view-team-settings", "View Team Settings", V::TeamsSettings),
    R::view("/teams-share/teams/add-team", "Add Team", V::TeamsAdd),
    R::view("/teams-share/teams/teams-activity", "Teams Activity", V::TeamsActivity),
    R::view("/teams-share/teams/business-voice", "Business Voice", V::BusinessVoice),
    // Email & Exchange
    R::group("/email", "Email & Exchange"),
    R::group("/email/administration", "Email Administration"),
    R::view("/email/administration/contacts", "List Contacts", V::ContactsList),
    R::view(
        "/email/administration/edit-mailbox-permissions",
        "Edit Mailbox Permissions",
        V::EditMailboxPermissions,
    ),
    R::view(
        "/email/administration/view-mobile-devices",
        "View Mobile Devices",
        V::ViewMobileDevices,
    ),
    R::view("/email/administration/edit-contact", "Edit Contact", V::EditContact),
    R::view("/email/administration/mailboxes", "List Mailboxes", V::MailboxesList),
    R::group("/email/reports", "Email Reports"),
    R::view("/email/reports/mailbox-statistics", "Mailbox Statistics", V::MailboxStatistics),
    R::view(
        "/email/reports/mailbox-cas-settings",
        "Mailbox Client Access Settings",
        V::MailboxCasSettings,
    ),
    R::view("/email/reports/message-trace", "Message Trace", V::MessageTrace),
    R::view("/email/reports/phishing-policies", "Phishing Policies", V::PhishingPolicies),
    // Security & Compliance
    R::group("/security", "Security & Compliance"),
    R::group("/security/administration", "Security Administration"),
    R::group("/security/reports", "Security Reports"),
    R::view("/security/reports/list-alerts", "List Alerts", V::ListAlerts),
    // Console
    R::group("/cipp", "CIPP"),
    R::group("/cipp/cipp", "CIPP"),
    R::view("/cipp/settings", "Settings", V::ConsoleSettings),
];
