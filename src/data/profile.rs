use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub degree: String,
    pub institution: String,
    pub year: u16,
    pub department: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affiliation {
    pub hospital: String,
    pub logo: String,
    pub role: String,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub year: u16,
    pub issuer: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub year: u16,
    pub role: String,
    pub hospital: String,
    pub logo: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    /// Empty means the first frame of the clip is used.
    pub thumbnail: String,
    pub duration: String,
    pub description: String,
    pub video_url: String,
    pub disclaimer: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationKind {
    Research,
    #[serde(rename = "Case Study")]
    CaseStudy,
    Review,
}

impl PublicationKind {
    pub fn label(&self) -> &'static str {
        match self {
            PublicationKind::Research => "Research",
            PublicationKind::CaseStudy => "Case Study",
            PublicationKind::Review => "Review",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub source: String,
    pub year: u16,
    pub kind: PublicationKind,
    pub topic: String,
    pub url: String,
    pub citation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: u16,
    pub credential_id: String,
    pub description: String,
    pub field: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub photo: String,
    pub profile_url: String,
    pub department: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub name: String,
    pub title: String,
    pub experience_years: u16,
    pub languages: Vec<String>,
    pub portrait: String,
    pub qualifications: Vec<Qualification>,
    pub affiliations: Vec<Affiliation>,
    pub intro: String,
    pub about: String,
    pub awards: Vec<Award>,
    pub experience: Vec<Experience>,
    pub videos: Vec<Video>,
    pub publications: Vec<Publication>,
    pub certifications: Vec<Certification>,
    pub faq: Vec<FaqEntry>,
    pub specialists: Vec<Specialist>,
}

impl DoctorProfile {
    /// "Dr. Saptarshi Bhattacharya" -> "Bhattacharya"
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn doctor_profile() -> DoctorProfile {
    DoctorProfile {
        name: "Dr. Saptarshi Bhattacharya".into(),
        title: "Chief Medical Advisor, EarlyFit".into(),
        experience_years: 18,
        languages: strings(&["English", "Hindi", "Bengali", "Telugu"]),
        portrait: "/assets/doctor1.png".into(),
        qualifications: vec![
            Qualification {
                degree: "DM (Endocrinology)".into(),
                institution: "AIIMS".into(),
                year: 2010,
                department: Some("Department of Endocrinology & Metabolism".into()),
            },
            Qualification {
                degree: "MD (Internal Medicine)".into(),
                institution: "MAMC".into(),
                year: 2007,
                department: Some("Department of Internal Medicine".into()),
            },
            Qualification {
                degree: "MBBS".into(),
                institution: "Medical College Kolkata".into(),
                year: 2004,
                department: None,
            },
        ],
        affiliations: vec![
            Affiliation {
                hospital: "Indraprastha Apollo Hospitals".into(),
                logo: "/assets/apollo.png".into(),
                role: "Senior Consultant, Endocrinology".into(),
                current: true,
            },
            Affiliation {
                hospital: "eHealth Diabetes & Endicrinology Centre (eDEC)".into(),
                logo: "/assets/eDEC.png".into(),
                role: "Director".into(),
                current: false,
            },
            Affiliation {
                hospital: "AIIMS".into(),
                logo: "/assets/AIIMS_logo.png".into(),
                role: "Former Senior Resident".into(),
                current: false,
            },
        ],
        intro: "Dr. Saptarshi Bhattacharya is a highly experienced endocrinologist, currently consulting at Apollo Hospitals (Delhi), and previously at Max Super Speciality Hospitals (Delhi). He did his residency in AIIMS (DM in Endocrinology) and Maulana Azad Medical College (MD). He is a Fellow of the American College of Endocrinology, and has received accolades for authoring 120+ research publications in diabetes, thyroid disorders, PCOS, and metabolic syndromes. As Early's Director of Medicine, he architects our clinical protocols that combine advanced diagnostics, individualized drug titration, and coordinated multidisciplinary support, all anchored in compassionate, patient-first care.".into(),
        about: "Dr. Saptarshi Bhattacharya is a senior endocrinologist with over 20 years of experience in managing a broad spectrum of endocrine and metabolic disorders. He is committed to delivering evidence-based, compassionate care tailored to individual needs, with a strong focus on patient education and long-term outcomes.\n\nDr. Bhattacharya is a member of the Education Working Group of the International Society of Endocrinology (ISE), an Executive Committee Member of the Indian Thyroid Society and the Endocrine Society of India, and currently serves as the Secretary of the Endocrine Society of Delhi.".into(),
        awards: vec![
            Award {
                name: "Excellence in Endocrinology Award".into(),
                year: 2023,
                issuer: "Indian Society of Endocrinology".into(),
                description: None,
            },
            Award {
                name: "Best Research Paper in Diabetes Management".into(),
                year: 2022,
                issuer: "Diabetes Association of India".into(),
                description: Some("Recognized for outstanding contribution to diabetes research and management strategies.".into()),
            },
        ],
        experience: vec![
            Experience {
                year: 2018,
                role: "Senior Consultant Endocrinologist".into(),
                hospital: "Max Healthcare".into(),
                logo: "/assets/max-healthcare-logo.jpg".into(),
                notes: Some("Leading diabetes and obesity management programs".into()),
            },
            Experience {
                year: 2015,
                role: "Consultant Endocrinologist".into(),
                hospital: "Fortis Healthcare".into(),
                logo: "/assets/fortis-logo.jpg".into(),
                notes: None,
            },
            Experience {
                year: 2010,
                role: "Senior Resident".into(),
                hospital: "AIIMS".into(),
                logo: "/assets/aiims-logo.jpg".into(),
                notes: Some("Specialized training in diabetes and thyroid disorders".into()),
            },
        ],
        videos: vec![
            Video {
                id: "4".into(),
                title: "Expert Talk: Understanding Diabetes".into(),
                thumbnail: String::new(),
                duration: "00:45".into(),
                description: "Dr. Saptarshi Bhattacharya provides insights into understanding diabetes, its types, and effective management strategies.".into(),
                video_url: "/assets/video1_saptarshi.mov".into(),
                disclaimer: None,
                tags: strings(&["Diabetes", "Expert Talk", "Awareness"]),
            },
            Video {
                id: "5".into(),
                title: "Preventive Measures for Thyroid Disorders".into(),
                thumbnail: String::new(),
                duration: "01:30".into(),
                description: "Dr. Saptarshi Bhattacharya discusses practical tips and lifestyle changes to prevent common thyroid disorders.".into(),
                video_url: "/assets/video2_saptarshi.mp4".into(),
                disclaimer: None,
                tags: strings(&["Thyroid", "Prevention", "Health Tips"]),
            },
            Video {
                id: "6".into(),
                title: "Managing PCOS and Hormonal Imbalances".into(),
                thumbnail: String::new(),
                duration: "02:15".into(),
                description: "Dr. Saptarshi Bhattacharya explains effective strategies for managing PCOS and restoring hormonal balance.".into(),
                video_url: "/assets/video3_saptarshi.mp4".into(),
                disclaimer: None,
                tags: strings(&["PCOS", "Hormones", "Women's Health"]),
            },
        ],
        publications: vec![
            Publication {
                title: "Efficacy of GLP-1 Receptor Agonists in Indian Population: A Real-World Study".into(),
                source: "Indian Journal of Endocrinology".into(),
                year: 2023,
                kind: PublicationKind::Research,
                topic: "Diabetes".into(),
                url: "#".into(),
                citation: "Bhattacharya, S. et al. (2023). Efficacy of GLP-1 Receptor Agonists in Indian Population: A Real-World Study. Indian Journal of Endocrinology, 27(4), 245-252.".into(),
            },
            Publication {
                title: "Metabolic Syndrome Management in Urban India: Challenges and Solutions".into(),
                source: "Diabetes Care India".into(),
                year: 2022,
                kind: PublicationKind::Review,
                topic: "Metabolism".into(),
                url: "#".into(),
                citation: "Bhattacharya, S. (2022). Metabolic Syndrome Management in Urban India: Challenges and Solutions. Diabetes Care India, 15(2), 89-96.".into(),
            },
            Publication {
                title: "Case Series: Successful Weight Loss with Tirzepatide in Indian Patients".into(),
                source: "Obesity Medicine".into(),
                year: 2023,
                kind: PublicationKind::CaseStudy,
                topic: "Obesity".into(),
                url: "#".into(),
                citation: "Bhattacharya, S. et al. (2023). Case Series: Successful Weight Loss with Tirzepatide in Indian Patients. Obesity Medicine, 8(3), 123-129.".into(),
            },
        ],
        certifications: vec![
            Certification {
                name: "Certified Diabetes Educator (CDE)".into(),
                issuer: "International Diabetes Federation".into(),
                year: 2019,
                credential_id: "CDE-2019-001245".into(),
                description: "Advanced certification in diabetes education and management strategies.".into(),
                field: "Diabetes Education".into(),
            },
            Certification {
                name: "Fellowship in Obesity Medicine (FOM)".into(),
                issuer: "World Obesity Federation".into(),
                year: 2020,
                credential_id: "FOM-2020-789".into(),
                description: "Specialized training in comprehensive obesity management and treatment protocols.".into(),
                field: "Obesity Medicine".into(),
            },
        ],
        faq: vec![
            FaqEntry {
                question: "What is included in this Plan?".into(),
                paragraphs: strings(&["Your plan is a complete diagnostic package designed to give you clarity. It includes:"]),
                bullets: strings(&[
                    "A Full Body Blood Test (at home)",
                    "A 1-on-1 Video Consultation with an Endocrinologist",
                    "A Personal Counseling Session with a Nutritionist",
                    "A 7-Day Starter Meal Plan",
                ]),
            },
            FaqEntry {
                question: "Who are Endocrinologists and why do I need one?".into(),
                paragraphs: strings(&["Endocrinologists are super-specialist doctors who are experts in hormones. Hormones control your metabolism, hunger, and how your body stores fat. Our endocrinologists will use your test results to find the hormonal root cause of your weight gain and create a medical plan that works with your body's biology."]),
                bullets: Vec::new(),
            },
            FaqEntry {
                question: "How do I get started after I pay?".into(),
                paragraphs: strings(&["The process is simple and we guide you every step of the way. After your purchase, one of our Care Coordinators will reach out to you on WhatsApp within a few hours to confirm your details and schedule a convenient time for your at-home blood test."]),
                bullets: Vec::new(),
            },
            FaqEntry {
                question: "What are the next steps after my diagnosis?".into(),
                paragraphs: strings(&[
                    "Your diagnosis is the essential first step on your path to sustainable weight loss. It provides the medical blueprint for your journey. Based on your results, your doctor will recommend the best path forward.",
                    "Step 1: Get Your Diagnosis. This plan helps you and your doctor find the real, biological reason behind your weight challenges. By analyzing your blood work and health history, we create a clear picture of your body's unique needs.",
                    "Step 2: Start Your Personalized Program. After your diagnosis, the next step is to begin a full program tailored to you. This is typically a medically-guided program that may include lifestyle changes and, if appropriate, doctor-prescribed medication to help manage your body's biology for lasting results.",
                ]),
                bullets: Vec::new(),
            },
            FaqEntry {
                question: "Is this plan safe and trustworthy?".into(),
                paragraphs: strings(&["Absolutely. Every part of our plan is designed and overseen by our team of medical experts, including specialist doctors and senior nutritionists. We use only NABL-certified labs for all our tests to ensure the highest standards of accuracy and safety."]),
                bullets: Vec::new(),
            },
        ],
        specialists: vec![
            Specialist {
                id: "2".into(),
                name: "Dr. Ankita Aneja".into(),
                designation: "Consultant Endocrinologist".into(),
                photo: "/assets/dr-ankita.png".into(),
                profile_url: "/doctors/ankita-aneja".into(),
                department: Some("Endocrinology".into()),
            },
            Specialist {
                id: "3".into(),
                name: "Dr. Savita Jain".into(),
                designation: "Senior Consultant, Endocrinology".into(),
                photo: "/assets/dr-savita.png".into(),
                profile_url: "/doctors/savita-jain".into(),
                department: Some("Endocrinology".into()),
            },
            Specialist {
                id: "4".into(),
                name: "Dr. Rini Yadav".into(),
                designation: "Consultant Endocrinologist".into(),
                photo: "/assets/dr-rini-yadav.png".into(),
                profile_url: "/doctors/rini-yadav".into(),
                department: Some("Endocrinology".into()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surname_is_last_word_of_name() {
        assert_eq!(doctor_profile().surname(), "Bhattacharya");
    }

    #[test]
    fn publication_kind_keeps_display_spelling() {
        let json = serde_json::to_string(&PublicationKind::CaseStudy).unwrap();
        assert_eq!(json, "\"Case Study\"");
        assert_eq!(PublicationKind::CaseStudy.label(), "Case Study");
    }

    #[test]
    fn video_ids_are_unique() {
        let profile = doctor_profile();
        let mut ids: Vec<&str> = profile.videos.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profile.videos.len());
    }
}
