// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in ignore lists.
//!
//! Both lists are public so callers can extend them rather than start over.

/// Prefixes of variables injected by package managers, runtimes, locale
/// categories, SSH agents, XDG base directories and D-Bus sessions.
///
/// Every entry ends with `_`.
pub const DEFAULT_IGNORED_PREFIXES: &[&str] = &["npm_", "NODE_", "LC_", "SSH_", "XDG_", "DBUS_"];

/// Common shell and session variables.
///
/// `_` is the shell's "last argument" variable and the only entry that ends
/// with `_`.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &[
    "SHELL",
    "TERM",
    "USER",
    "HOME",
    "PATH",
    "PWD",
    "LANG",
    "DISPLAY",
    "COLORTERM",
    "EDITOR",
    "PAGER",
    "HOSTNAME",
    "LOGNAME",
    "MAIL",
    "OLDPWD",
    "SHLVL",
    "_",
];
