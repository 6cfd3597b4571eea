// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = String::new();
		Self::render(&mut out, diagnostic, 0);
		out
	}

	fn render(out: &mut String, diagnostic: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = write!(out, "{}{}: {}", indent, diagnostic.code, diagnostic.message);

		if let Some(column) = &diagnostic.column {
			let _ = write!(out, "\n{}  --> column '{}'", indent, column);
		}

		if let Some(label) = &diagnostic.label {
			let _ = write!(out, "\n{}  | {}", indent, label);
		}

		if let Some(help) = &diagnostic.help {
			let _ = write!(out, "\n{}  = help: {}", indent, help);
		}

		for note in &diagnostic.notes {
			let _ = write!(out, "\n{}  = note: {}", indent, note);
		}

		if let Some(cause) = &diagnostic.cause {
			let _ = write!(out, "\n{}caused by:\n", indent);
			Self::render(out, cause, depth + 1);
		}
	}
}
