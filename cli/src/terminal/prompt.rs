// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Line prompts on stderr. Callers are expected to gate on
//! `console::user_attended_stderr()` before prompting, so a non-interactive
//! run never blocks on input.

use console::Term;

/// Asks a question and reads one line; blank input takes the default.
pub fn ask(question: &str, default: &str) -> String {
    let term = Term::stderr();
    let _ = term.write_str(&format!("{question} [{default}]: "));
    match term.read_line() {
        Ok(line) if !line.trim().is_empty() => line.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(question: &str) -> bool {
    let term = Term::stderr();
    let _ = term.write_str(&format!("{question} [y/N]: "));
    matches!(term.read_line(), Ok(line) if line.trim().eq_ignore_ascii_case("y"))
}
