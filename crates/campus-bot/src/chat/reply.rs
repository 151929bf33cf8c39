use super::criteria::{CgpaMode, QueryCriteria};
use super::vocab::month_label;
use crate::dataset::PlacementRecord;
use std::fmt::Write as _;

/// Fixed reply when the drive records cannot be loaded at all.
pub const DATA_SOURCE_MISSING: &str =
    "⚠️ Placement data source not found. Please try again once the drive records are restored.";

const MAX_TABLE_ROWS: usize = 15;
const MAX_DATE_LIST: usize = 5;

/// Tag strip plus the first response rule that applies to the filtered set.
pub(crate) fn render_reply(criteria: &QueryCriteria, matches: &[&PlacementRecord]) -> String {
    let mut reply = tag_strip(criteria);
    reply.push_str(&select_response(criteria, matches));
    reply
}

/// Echo the recognized filters back as short badges so users can see why a
/// query matched what it matched. Omitted when nothing was recognized.
fn tag_strip(criteria: &QueryCriteria) -> String {
    let mut tags: Vec<String> = Vec::new();

    if let Some(year) = criteria.year {
        tags.push(format!("Year {year}"));
    }
    if let Some(company) = &criteria.company {
        tags.push(format!("Company {company}"));
    }
    if let Some(cgpa) = criteria.cgpa {
        match criteria.cgpa_mode {
            CgpaMode::Criteria => tags.push(format!("CGPA cutoff ≥ {cgpa}")),
            CgpaMode::Eligible => tags.push(format!("Your CGPA {cgpa}")),
        }
    }
    if let Some(role) = criteria.role {
        tags.push(format!("Role {}", role.label()));
    }
    if let Some(company_type) = criteria.company_type {
        tags.push(company_type.label().to_string());
    }
    if let Some(label) = criteria.month.and_then(month_label) {
        tags.push(label.to_string());
    }

    if tags.is_empty() {
        return String::new();
    }

    let mut strip = String::from("<p class=\"criteria-tags\">");
    for tag in tags {
        let _ = write!(strip, "<span class=\"tag\">{tag}</span>");
    }
    strip.push_str("</p>");
    strip
}

/// Ordered predicate/handler pairs; the first matching rule wins.
fn select_response(criteria: &QueryCriteria, matches: &[&PlacementRecord]) -> String {
    let Some(&first) = matches.first() else {
        return no_match_response();
    };
    let intents = &criteria.intents;

    if intents.highest {
        let top = matches.iter().copied().fold(first, |best, candidate| {
            if candidate.package_lpa > best.package_lpa {
                candidate
            } else {
                best
            }
        });
        return format!(
            "🏆 <b>{}</b> offers the highest package of <b>₹{} LPA</b>.",
            top.company, top.package_lpa
        );
    }

    if intents.lowest {
        let bottom = matches.iter().copied().fold(first, |best, candidate| {
            if candidate.package_lpa < best.package_lpa {
                candidate
            } else {
                best
            }
        });
        return format!(
            "📉 <b>{}</b> offers the lowest package of <b>₹{} LPA</b>.",
            bottom.company, bottom.package_lpa
        );
    }

    if intents.count {
        return match criteria.year {
            Some(year) => format!(
                "🔢 <b>{}</b> company(ies) visited the campus in <b>{year}</b>.",
                matches.len()
            ),
            None => format!("🔢 <b>{}</b> company(ies) match your query.", matches.len()),
        };
    }

    if let Some(company) = &criteria.company {
        // First matching record for the resolved company; under show_all the
        // filtered set is the whole dataset, so look it up explicitly.
        let record = matches
            .iter()
            .find(|record| record.company.eq_ignore_ascii_case(company))
            .copied()
            .unwrap_or(first);

        if intents.ask_package {
            return format!(
                "💰 <b>{company}</b> offers a package of <b>₹{} LPA</b>.",
                record.package_lpa
            );
        }
        if intents.ask_hiring {
            return format!(
                "🧩 <b>Hiring process of {company}</b>: {}",
                record.hiring_process
            );
        }
        if intents.ask_date {
            return format!(
                "🗓️ <b>{company}</b> is scheduled to visit on <b>{}</b>.",
                record.visit_date
            );
        }
        if intents.ask_role {
            return format!(
                "👔 <b>{company}</b> is hiring for: <b>{}</b>.",
                record.roles_offered
            );
        }
    }

    if intents.ask_date && criteria.company.is_none() && matches.len() <= MAX_DATE_LIST {
        let mut out = String::from("<p>🗓️ Visit schedule:</p><ul>");
        for record in matches {
            let _ = write!(
                out,
                "<li><b>{}</b>: {}</li>",
                record.company, record.visit_date
            );
        }
        out.push_str("</ul>");
        return out;
    }

    listing_response(criteria, matches)
}

fn no_match_response() -> String {
    "😕 No matching companies found. Try queries like \
     'tech roles in august with cgpa 8+' or 'highest package in 2025'."
        .to_string()
}

fn listing_response(criteria: &QueryCriteria, matches: &[&PlacementRecord]) -> String {
    let mut out = summary_line(criteria, matches.len());

    out.push_str(
        "<table border=\"1\" cellpadding=\"6\" cellspacing=\"0\" \
         style=\"border-collapse: collapse; margin-top: 10px; font-size: 15px;\">\
         <tr style=\"background-color: #f0f0f0;\">\
         <th>Company</th><th>Role</th><th>Package</th><th>Min CGPA</th><th>Visit Date</th></tr>",
    );

    for record in matches.iter().take(MAX_TABLE_ROWS) {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>₹{} LPA</td><td>{}</td><td>{}</td></tr>",
            record.company,
            record.roles_offered,
            record.package_lpa,
            record.min_cgpa,
            record.visit_date
        );
    }
    out.push_str("</table>");

    if matches.len() > MAX_TABLE_ROWS {
        let _ = write!(out, "<p>…and {} more.</p>", matches.len() - MAX_TABLE_ROWS);
    }

    out
}

fn summary_line(criteria: &QueryCriteria, count: usize) -> String {
    let mut line = format!("<p>📋 Found <b>{count}</b> company(ies)");

    if let Some(year) = criteria.year {
        let _ = write!(line, " visiting in {year}");
    }
    if let Some(cgpa) = criteria.cgpa {
        match criteria.cgpa_mode {
            CgpaMode::Criteria => {
                let _ = write!(line, " with CGPA cutoff ≥ {cgpa}");
            }
            CgpaMode::Eligible => {
                let _ = write!(line, " open to a CGPA of {cgpa}");
            }
        }
    }
    if let Some(company_type) = criteria.company_type {
        let _ = write!(line, " ({})", company_type.label().to_lowercase());
    }

    line.push_str(":</p>");
    line
}
