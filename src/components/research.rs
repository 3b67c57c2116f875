use std::collections::BTreeMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::data::profile::DoctorProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Publication,
    Certification,
    Award,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: u16,
    pub kind: EntryKind,
    pub title: String,
    pub subtitle: String,
    pub source: String,
    pub citation: Option<String>,
    pub credential_id: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YearGroup {
    pub year: u16,
    pub entries: Vec<TimelineEntry>,
}

/// Publications, awards and certifications merged into one timeline,
/// newest year first. Entries keep profile order within a year.
pub fn build_timeline(doctor: &DoctorProfile) -> Vec<YearGroup> {
    let publications = doctor.publications.iter().map(|p| TimelineEntry {
        year: p.year,
        kind: EntryKind::Publication,
        title: p.title.clone(),
        subtitle: format!("{} • {}", p.kind.label(), p.topic),
        source: format!("{} • {}", p.source, p.year),
        citation: Some(p.citation.clone()),
        credential_id: None,
        description: None,
        url: Some(p.url.clone()),
    });
    let awards = doctor.awards.iter().map(|a| TimelineEntry {
        year: a.year,
        kind: EntryKind::Award,
        title: a.name.clone(),
        subtitle: "Award • Recognition".to_string(),
        source: format!("{} • {}", a.issuer, a.year),
        citation: None,
        credential_id: None,
        description: a.description.clone(),
        url: None,
    });
    let certifications = doctor.certifications.iter().map(|c| TimelineEntry {
        year: c.year,
        kind: EntryKind::Certification,
        title: c.name.clone(),
        subtitle: format!("Certification • {}", c.field),
        source: format!("{} • {}", c.issuer, c.year),
        citation: None,
        credential_id: Some(c.credential_id.clone()),
        description: Some(c.description.clone()),
        url: None,
    });

    let mut by_year: BTreeMap<u16, Vec<TimelineEntry>> = BTreeMap::new();
    for entry in publications.chain(awards).chain(certifications) {
        by_year.entry(entry.year).or_default().push(entry);
    }
    by_year
        .into_iter()
        .rev()
        .map(|(year, entries)| YearGroup { year, entries })
        .collect()
}

fn entry_id(year: u16, index: usize) -> String {
    format!("{}-{}", year, index)
}

/// Only one citation is expanded at a time.
fn toggle_citation(current: &Option<String>, id: &str) -> Option<String> {
    match current {
        Some(open) if open == id => None,
        _ => Some(id.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct ResearchProps {
    pub id: AttrValue,
    pub doctor: Rc<DoctorProfile>,
}

#[function_component(ResearchRecognitions)]
pub fn research_recognitions(props: &ResearchProps) -> Html {
    let expanded = use_state(|| None::<String>);
    let timeline = use_memo(|doctor| build_timeline(doctor), props.doctor.clone());

    html! {
        <section id={props.id.clone()} class="research-section">
            <div class="research-inner">
                <div class="research-header">
                    <h2>{"Research & Recognitions"}</h2>
                    <p>{format!("Key publications, credentials, and awards by {}", props.doctor.name)}</p>
                </div>
                <div class="research-timeline">
                    { for timeline.iter().map(|group| html! {
                        <div class="research-year" key={group.year}>
                            { for group.entries.iter().enumerate().map(|(index, entry)| {
                                let id = entry_id(group.year, index);
                                let is_left = index % 2 == 0;
                                let is_open = expanded.as_deref() == Some(id.as_str());
                                let on_toggle = {
                                    let expanded = expanded.clone();
                                    let id = id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        expanded.set(toggle_citation(&expanded, &id));
                                    })
                                };
                                let accent = match entry.kind {
                                    EntryKind::Publication => "accent-publication",
                                    EntryKind::Certification | EntryKind::Award => "accent-credential",
                                };
                                html! {
                                    <div key={id.clone()} class={classes!("research-entry", if is_left { "left" } else { "right" })}>
                                        <div class="research-card">
                                            <div class={classes!("research-accent", accent, if is_left { "left" } else { "right" })}></div>
                                            <div class="research-icon">
                                                { if entry.kind == EntryKind::Publication { "📖" } else { "🏅" } }
                                            </div>
                                            <div class="research-body">
                                                <h4>{&entry.title}</h4>
                                                <p class="research-meta">{&entry.subtitle}</p>
                                                <p class="research-meta">{&entry.source}</p>
                                                if let Some(citation) = &entry.citation {
                                                    <div class={classes!("research-citation", is_open.then(|| "expanded"))}>
                                                        <p>{citation}</p>
                                                    </div>
                                                    <button class="research-toggle" onclick={on_toggle}>
                                                        { if is_open { "Show Less ▲" } else { "Show More ▼" } }
                                                    </button>
                                                }
                                                if let Some(description) = &entry.description {
                                                    <p class="research-description">{description}</p>
                                                }
                                                if let Some(credential) = &entry.credential_id {
                                                    <span class="research-badge">{format!("ID: {}", credential)}</span>
                                                }
                                            </div>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .research-section {
                    width: 100%;
                    background: linear-gradient(to bottom, #434a35, #393f2d);
                    padding: 3rem 0;
                }
                .research-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .research-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .research-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 0.5rem;
                }
                .research-header p {
                    font-size: 1.125rem;
                    color: #dbdfd2;
                }
                .research-year {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .research-entry {
                    display: flex;
                }
                .research-entry.right {
                    justify-content: flex-end;
                }
                .research-card {
                    position: relative;
                    display: flex;
                    gap: 1rem;
                    width: 45%;
                    background: #ffffff;
                    border: 1px solid #e4e7df;
                    border-radius: 0.75rem;
                    padding: 1.25rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .research-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.2);
                }
                .research-accent {
                    position: absolute;
                    top: 0;
                    height: 100%;
                    width: 4px;
                }
                .research-accent.left {
                    left: 0;
                    border-radius: 0.75rem 0 0 0.75rem;
                }
                .research-accent.right {
                    right: 0;
                    border-radius: 0 0.75rem 0.75rem 0;
                }
                .accent-publication {
                    background: #4caf50;
                }
                .accent-credential {
                    background: #ff9800;
                }
                .research-icon {
                    font-size: 1.5rem;
                }
                .research-body h4 {
                    font-weight: 700;
                    color: #2e3523;
                    font-size: 1.25rem;
                    margin: 0 0 0.25rem 0;
                }
                .research-meta {
                    color: #6b6f66;
                    font-size: 0.875rem;
                    margin: 0 0 0.25rem 0;
                }
                .research-citation {
                    color: #4a4f46;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    max-height: 3rem;
                    overflow: hidden;
                    transition: max-height 0.25s ease;
                }
                .research-citation.expanded {
                    max-height: 24rem;
                }
                .research-toggle {
                    margin-top: 0.5rem;
                    background: none;
                    border: none;
                    padding: 0;
                    color: #4caf50;
                    font-weight: 500;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .research-description {
                    color: #4a4f46;
                    font-size: 0.875rem;
                    font-style: italic;
                }
                .research-badge {
                    display: inline-block;
                    font-size: 0.75rem;
                    background: #f3f4f6;
                    color: #6b6f66;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                }
                @media (max-width: 768px) {
                    .research-entry.right {
                        justify-content: flex-start;
                    }
                    .research-card {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::profile::doctor_profile;

    #[test]
    fn years_run_newest_first() {
        let timeline = build_timeline(&doctor_profile());
        let years: Vec<u16> = timeline.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2023, 2022, 2020, 2019]);
    }

    #[test]
    fn entries_keep_profile_order_within_a_year() {
        let timeline = build_timeline(&doctor_profile());
        let newest = &timeline[0];
        let kinds: Vec<EntryKind> = newest.entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EntryKind::Publication, EntryKind::Publication, EntryKind::Award]
        );
        assert!(newest.entries[0].title.starts_with("Efficacy of GLP-1"));
        assert_eq!(newest.entries[1].subtitle, "Case Study • Obesity");
    }

    #[test]
    fn certifications_carry_credentials_not_citations() {
        let timeline = build_timeline(&doctor_profile());
        let oldest = timeline.last().unwrap();
        assert_eq!(oldest.year, 2019);
        let entry = &oldest.entries[0];
        assert_eq!(entry.kind, EntryKind::Certification);
        assert_eq!(entry.credential_id.as_deref(), Some("CDE-2019-001245"));
        assert!(entry.citation.is_none());
    }

    #[test]
    fn citation_toggle_keeps_one_open() {
        let open = toggle_citation(&None, "2023-0");
        assert_eq!(open.as_deref(), Some("2023-0"));
        let switched = toggle_citation(&open, "2022-1");
        assert_eq!(switched.as_deref(), Some("2022-1"));
        assert_eq!(toggle_citation(&switched, "2022-1"), None);
    }
}
