use crate::catalog::Role;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// One role as a text block. The first result carries the recommended marker.
pub fn format_role(role: &Role, index: usize, use_color: bool) -> String {
    let recommended = index == 0;
    let marker = if recommended { "★" } else { "◆" };
    let suffix = if recommended { " (recommended)" } else { "" };
    let permissions = role.permissions.join(", ");

    if use_color {
        format!(
            "{} {}{}\n  {}\n  {} {}",
            if recommended {
                marker.bright_yellow()
            } else {
                marker.dimmed()
            },
            role.name.bright_blue().bold(),
            suffix.bright_yellow(),
            role.description,
            "Permissions:".dimmed(),
            permissions.bright_green()
        )
    } else {
        format!(
            "{} {}{}\n  {}\n  Permissions: {}",
            marker, role.name, suffix, role.description, permissions
        )
    }
}

pub fn write_text<W: Write>(out: &mut W, roles: &[Role], use_color: bool) -> Result<()> {
    if roles.is_empty() {
        writeln!(out, "No roles found for this task.")?;
        return Ok(());
    }

    let noun = if roles.len() == 1 { "role" } else { "roles" };
    writeln!(out, "Found {} {noun}:\n", roles.len())?;
    for (index, role) in roles.iter().enumerate() {
        writeln!(out, "{}\n", format_role(role, index, use_color))?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, query: &str, roles: &[Role]) -> Result<()> {
    let output = serde_json::json!({
        "query": query,
        "results": roles,
        "count": roles.len(),
    });
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

/// One role per line, then a `_metadata` line
pub fn write_jsonl<W: Write>(out: &mut W, query: &str, roles: &[Role]) -> Result<()> {
    for role in roles {
        serde_json::to_writer(&mut *out, role)?;
        writeln!(out)?;
    }
    let metadata = serde_json::json!({
        "_metadata": {
            "query": query,
            "count": roles.len(),
        }
    });
    serde_json::to_writer(&mut *out, &metadata)?;
    writeln!(out)?;
    Ok(())
}
