use std::rc::Rc;

use yew::prelude::*;

use crate::data::profile::DoctorProfile;

#[derive(Clone, Debug, PartialEq)]
pub struct AboutPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: String,
    pub highlight: String,
}

/// A run of text and whether it is the highlighted phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Splits `content` around every occurrence of `highlight`. Empty runs are dropped.
pub fn highlight_segments<'a>(content: &'a str, highlight: &str) -> Vec<Segment<'a>> {
    if highlight.is_empty() {
        return vec![Segment { text: content, highlighted: false }];
    }
    let mut segments = Vec::new();
    let mut rest = content;
    while let Some(at) = rest.find(highlight) {
        if at > 0 {
            segments.push(Segment { text: &rest[..at], highlighted: false });
        }
        let end = at + highlight.len();
        segments.push(Segment { text: &rest[at..end], highlighted: true });
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push(Segment { text: rest, highlighted: false });
    }
    segments
}

pub fn about_points(doctor: &DoctorProfile) -> Vec<AboutPoint> {
    vec![
        AboutPoint {
            icon: "🗓️",
            title: "Experience",
            content: format!("{}+ years of specialized endocrinology practice", doctor.experience_years),
            highlight: format!("{}+ years", doctor.experience_years),
        },
        AboutPoint {
            icon: "🩺",
            title: "Specialties",
            content: "Diabetes, thyroid disorders, obesity, PCOS, and metabolic conditions".into(),
            highlight: "Comprehensive care".into(),
        },
        AboutPoint {
            icon: "📚",
            title: "Research & Publications",
            content: "100+ scientific publications in peer-reviewed journals".into(),
            highlight: "100+ publications".into(),
        },
        AboutPoint {
            icon: "👥",
            title: "Leadership",
            content: "Executive roles in Endocrine Society of India and International Society of Endocrinology".into(),
            highlight: "Industry leader".into(),
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub id: AttrValue,
    pub doctor: Rc<DoctorProfile>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let doctor = &props.doctor;
    let points = about_points(doctor);

    html! {
        <section id={props.id.clone()} class="about-section">
            <h2>{"🩺 "}{format!("About Dr. {}", doctor.surname())}</h2>
            <p class="about-intro">{&doctor.intro}</p>
            <div class="about-grid">
                { for points.iter().map(|point| html! {
                    <div class="about-card" key={point.title}>
                        <div class="about-icon" title={point.title}>{point.icon}</div>
                        <p>
                            { for highlight_segments(&point.content, &point.highlight).into_iter().map(|segment| {
                                if segment.highlighted {
                                    html! { <span class="about-highlight">{segment.text}</span> }
                                } else {
                                    html! { <span>{segment.text}</span> }
                                }
                            }) }
                        </p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .about-section {
                    background: #faf8f1;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin: 2rem auto;
                    max-width: 72rem;
                }
                .about-section h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #2e3523;
                    margin-bottom: 1rem;
                }
                .about-intro {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #2e3523;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .about-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    background: #dbdfd2;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.2s ease;
                }
                .about-card:hover {
                    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
                }
                .about-icon {
                    font-size: 1.5rem;
                }
                .about-card p {
                    margin: 0;
                    line-height: 1.6;
                    color: #2e3523;
                }
                .about-highlight {
                    font-weight: 700;
                    color: #4caf50;
                }
                @media (max-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr;
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
    fn highlight_is_split_out_of_content() {
        let segments = highlight_segments("18+ years of specialized practice", "18+ years");
        assert_eq!(
            segments,
            vec![
                Segment { text: "18+ years", highlighted: true },
                Segment { text: " of specialized practice", highlighted: false },
            ]
        );
    }

    #[test]
    fn missing_highlight_leaves_plain_text() {
        let segments = highlight_segments("Diabetes and thyroid", "Comprehensive care");
        assert_eq!(segments, vec![Segment { text: "Diabetes and thyroid", highlighted: false }]);
    }

    #[test]
    fn repeated_highlight_is_marked_each_time() {
        let segments = highlight_segments("a x b x", "x");
        let marked = segments.iter().filter(|s| s.highlighted).count();
        assert_eq!(marked, 2);
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn experience_point_uses_profile_years() {
        let points = about_points(&doctor_profile());
        assert_eq!(points[0].highlight, "18+ years");
        assert!(points[0].content.starts_with("18+ years"));
    }
}
