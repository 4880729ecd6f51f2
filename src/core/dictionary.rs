//! Command dictionaries.
//!
//! Three immutable partitions (`iaas`, `misc`, `root`) plus the deprecated
//! command map, built once at process start and never mutated via
//! `once_cell::sync::Lazy` statics holding closed literal data.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::{CommandType, DeprecationKind, DeprecationRecord};

const DOC_ROOT: &str = "https://docs.usacloud.example/migration";

/// `iaas` partition: name -> subcommand list.
pub static IAAS_COMMANDS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "server",
        vec![
            "list", "read", "create", "update", "delete", "boot", "shutdown", "reset", "ssh",
            "scp", "plan-change", "disk-connect", "disk-disconnect", "monitor",
        ],
    );
    m.insert(
        "disk",
        vec![
            "list", "read", "create", "update", "delete", "connect", "disconnect",
            "resize-partition", "monitor",
        ],
    );
    m.insert(
        "archive",
        vec!["list", "read", "create", "update", "delete", "ftp-open", "ftp-close"],
    );
    m.insert(
        "cdrom",
        vec!["list", "read", "create", "update", "delete", "ftp-open", "ftp-close"],
    );
    m.insert(
        "switch",
        vec![
            "list", "read", "create", "update", "delete", "connect", "disconnect",
            "bridge-connect", "bridge-disconnect",
        ],
    );
    m.insert(
        "internet",
        vec![
            "list", "read", "create", "update", "delete", "update-bandwidth", "subnet-add",
            "subnet-delete",
        ],
    );
    m.insert("bridge", vec!["list", "read", "create", "update", "delete"]);
    m.insert("privatehost", vec!["list", "read", "create", "update", "delete"]);
    m.insert(
        "packet-filter",
        vec![
            "list", "read", "create", "update", "delete", "rule-add", "rule-update",
            "rule-delete",
        ],
    );
    m.insert("license", vec!["list", "read", "create", "update", "delete"]);
    m.insert("icon", vec!["list", "read", "create", "update", "delete"]);
    m.insert("note", vec!["list", "read", "create", "update", "delete"]);
    m.insert("sshkey", vec!["list", "read", "create", "update", "delete", "generate"]);
    m.insert(
        "simple-monitor",
        vec!["list", "read", "create", "update", "delete", "monitor"],
    );
    m.insert(
        "dns",
        vec![
            "list", "read", "create", "update", "delete", "record-add", "record-update",
            "record-delete",
        ],
    );
    m.insert(
        "gslb",
        vec![
            "list", "read", "create", "update", "delete", "server-add", "server-update",
            "server-delete",
        ],
    );
    m.insert(
        "proxylb",
        vec![
            "list", "read", "create", "update", "delete", "certificate-info",
            "certificate-update", "certificate-delete",
        ],
    );
    m.insert("auto-backup", vec!["list", "read", "create", "update", "delete"]);
    m.insert(
        "container-registry",
        vec![
            "list", "read", "create", "update", "delete", "user-add", "user-update",
            "user-delete",
        ],
    );
    m.insert(
        "database",
        vec![
            "list", "read", "create", "update", "delete", "backup-create", "backup-list",
            "backup-restore",
        ],
    );
    m.insert("load-balancer", vec!["list", "read", "create", "update", "delete"]);
    m.insert(
        "mobile-gateway",
        vec!["list", "read", "create", "update", "delete", "sim-add", "sim-delete"],
    );
    m.insert("nfs", vec!["list", "read", "create", "update", "delete"]);
    m.insert(
        "vpc-router",
        vec![
            "list", "read", "create", "update", "delete", "interface-add", "interface-update",
            "interface-delete",
        ],
    );
    m.insert("ipaddress", vec!["list", "read", "update"]);
    m.insert("ipv6net", vec!["list", "read"]);
    m.insert("ipv6addr", vec!["list", "read", "update"]);
    m.insert("subnet", vec!["list", "read"]);
    m.insert(
        "interface",
        vec!["list", "read", "create", "update", "delete", "connect", "disconnect"],
    );
    m
});

/// `misc` partition: name -> subcommand list.
pub static MISC_COMMANDS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("product-disk", vec!["list", "read"]);
    m.insert("product-internet", vec!["list", "read"]);
    m.insert("product-server", vec!["list", "read"]);
    m.insert("product-price", vec!["list", "read"]);
    m.insert("region", vec!["list", "read"]);
    m.insert("zone", vec!["list", "read"]);
    m.insert("bill", vec!["list", "read"]);
    m.insert("self", vec!["read"]);
    m.insert("authstatus", vec!["read"]);
    m.insert("webaccel", vec!["list", "read", "purge"]);
    m.insert("rest", vec!["read"]);
    m
});

/// `root` partition: name -> subcommand list; an empty list means standalone
/// (rejects any subcommand).
pub static ROOT_COMMANDS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("version", vec![]);
    m.insert("update-self", vec![]);
    m.insert("completion", vec![]);
    m.insert("config", vec![]);
    m
});

/// Deprecated-command -> record map.
pub static DEPRECATED_COMMANDS: Lazy<HashMap<&'static str, DeprecationRecord>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "iso-image",
        DeprecationRecord {
            old_name: "iso-image",
            kind: DeprecationKind::Renamed,
            replacement: "cdrom",
            message: "iso-image was renamed to cdrom",
            alternatives: vec![],
            doc_url: "https://docs.usacloud.example/migration/iso-image-to-cdrom",
        },
    );
    m.insert(
        "startup-script",
        DeprecationRecord {
            old_name: "startup-script",
            kind: DeprecationKind::Renamed,
            replacement: "note",
            message: "startup-script was renamed to note",
            alternatives: vec![],
            doc_url: "https://docs.usacloud.example/migration/startup-script-to-note",
        },
    );
    m.insert(
        "ipv4",
        DeprecationRecord {
            old_name: "ipv4",
            kind: DeprecationKind::Renamed,
            replacement: "ipaddress",
            message: "ipv4 was renamed to ipaddress",
            alternatives: vec![],
            doc_url: "https://docs.usacloud.example/migration/ipv4-to-ipaddress",
        },
    );
    m.insert(
        "summary",
        DeprecationRecord {
            old_name: "summary",
            kind: DeprecationKind::Discontinued,
            replacement: "",
            message: "summary has been discontinued",
            alternatives: vec!["bill", "self", "rest"],
            doc_url: "https://docs.usacloud.example/migration/summary-discontinued",
        },
    );
    m.insert(
        "object-storage",
        DeprecationRecord {
            old_name: "object-storage",
            kind: DeprecationKind::Discontinued,
            replacement: "",
            message: "object-storage has been discontinued",
            alternatives: vec!["use an S3-compatible client against the object storage endpoint directly"],
            doc_url: "https://docs.usacloud.example/migration/object-storage-discontinued",
        },
    );
    m
});

pub fn doc_root() -> &'static str {
    DOC_ROOT
}

/// Single authoritative lookup across all three partitions.
pub fn is_known(name: &str) -> Option<CommandType> {
    let lower = name.to_lowercase();
    if IAAS_COMMANDS.contains_key(lower.as_str()) {
        Some(CommandType::Iaas)
    } else if MISC_COMMANDS.contains_key(lower.as_str()) {
        Some(CommandType::Misc)
    } else if ROOT_COMMANDS.contains_key(lower.as_str()) {
        Some(CommandType::Root)
    } else {
        None
    }
}

/// Returns the declared subcommand list; an empty list (not `None`) for
/// standalone commands.
pub fn subcommands_for(name: &str) -> Option<&'static [&'static str]> {
    let lower = name.to_lowercase();
    IAAS_COMMANDS
        .get(lower.as_str())
        .or_else(|| MISC_COMMANDS.get(lower.as_str()))
        .or_else(|| ROOT_COMMANDS.get(lower.as_str()))
        .map(|v| v.as_slice())
}

/// True iff name is a root-kind command whose subcommand list is empty.
pub fn standalone(name: &str) -> bool {
    let lower = name.to_lowercase();
    ROOT_COMMANDS
        .get(lower.as_str())
        .is_some_and(|subs| subs.is_empty())
}

/// All known main command names across the three partitions, canonical case.
pub fn all_main_commands() -> Vec<&'static str> {
    IAAS_COMMANDS
        .keys()
        .chain(MISC_COMMANDS.keys())
        .chain(ROOT_COMMANDS.keys())
        .copied()
        .collect()
}
