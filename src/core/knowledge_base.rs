// src/core/knowledge_base.rs

//! Central store of every piece of canned content the application shows.
//! The doctor directory, the assistant's scripted answers, the mock scan
//! verdict, and the profile seed all live here as static, read-only data.
//! Keeping it data-driven means the screens contain no embedded copy and the
//! mock content can be revised in one place.

use crate::core::models::{Availability, Doctor, Profile, ScanRecord, ScanResult, Severity};
use chrono::NaiveDate;

// --- Doctor Directory Seed ---

/// The full doctor directory. Five records, never mutated; the directory
/// filter produces ordered subsequences of this slice.
pub static DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "Dr. Sarah Chen",
        clinic: "Vision Care Center",
        specializations: &["Retinal Diseases", "Diabetic Retinopathy"],
        rating: 4.9,
        reviews: 142,
        distance_km: 2.3,
        phone: "+1 (555) 123-4567",
        email: "dr.chen@visioncare.com",
        address: "123 Health Street, Medical District",
        availability: Availability::Available,
        next_slot: "Today 3:30 PM",
        experience_years: 12,
    },
    Doctor {
        id: 2,
        name: "Dr. Michael Rodriguez",
        clinic: "EyeCare Plus",
        specializations: &["Glaucoma", "Cataract Surgery"],
        rating: 4.8,
        reviews: 89,
        distance_km: 1.8,
        phone: "+1 (555) 234-5678",
        email: "dr.rodriguez@eyecareplus.com",
        address: "456 Wellness Ave, Downtown",
        availability: Availability::Busy,
        next_slot: "Tomorrow 10:00 AM",
        experience_years: 15,
    },
    Doctor {
        id: 3,
        name: "Dr. Emily Johnson",
        clinic: "Advanced Eye Institute",
        specializations: &["Corneal Diseases", "Refractive Surgery"],
        rating: 4.7,
        reviews: 67,
        distance_km: 4.1,
        phone: "+1 (555) 345-6789",
        email: "dr.johnson@advancedeye.com",
        address: "789 Medical Plaza, Uptown",
        availability: Availability::Available,
        next_slot: "Today 5:15 PM",
        experience_years: 8,
    },
    Doctor {
        id: 4,
        name: "Dr. James Liu",
        clinic: "Comprehensive Eye Care",
        specializations: &["Pediatric Ophthalmology", "Strabismus"],
        rating: 4.9,
        reviews: 156,
        distance_km: 3.7,
        phone: "+1 (555) 456-7890",
        email: "dr.liu@comprehensiveeye.com",
        address: "321 Family Health Blvd, Suburbia",
        availability: Availability::Available,
        next_slot: "Tomorrow 2:00 PM",
        experience_years: 18,
    },
    Doctor {
        id: 5,
        name: "Dr. Maria Gonzalez",
        clinic: "Retina Specialists",
        specializations: &["Macular Degeneration", "Retinal Detachment"],
        rating: 4.8,
        reviews: 98,
        distance_km: 5.2,
        phone: "+1 (555) 567-8901",
        email: "dr.gonzalez@retinaspecs.com",
        address: "654 Specialist Row, Medical Center",
        availability: Availability::Unavailable,
        next_slot: "Next Week",
        experience_years: 20,
    },
];

/// Choices offered by the specialization filter. "All specializations" is
/// represented as the absence of a selection, not as a list entry.
pub static SPECIALIZATIONS: &[&str] = &[
    "Retinal Diseases",
    "Glaucoma",
    "Cataract Surgery",
    "Corneal Diseases",
    "Pediatric Ophthalmology",
    "Macular Degeneration",
];

/// Radius choices of the distance filter, in kilometers. The second entry
/// (10 km) is the default.
pub static DISTANCE_CHOICES_KM: &[u8] = &[5, 10, 25, 50];

// --- Assistant Script ---

/// First message of every chat session.
pub static GREETING: &str = "Hello! I'm your AI Eye Care Assistant. I can help you understand eye diseases, symptoms, treatments, and prevention methods. How can I assist you today?";

/// Suggested prompts shown beside the chat; Up/Down cycles them into the
/// input line.
pub static QUICK_QUESTIONS: &[&str] = &[
    "What are common symptoms of diabetic retinopathy?",
    "How can I prevent cataracts?",
    "What causes dry eyes?",
    "When should I see an eye doctor?",
    "How does glaucoma develop?",
];

pub static RESPONSE_DIABETIC: &str = "Diabetic retinopathy is a serious eye condition that can develop in people with diabetes. Common symptoms include:\n\n\u{2022} Blurred or fluctuating vision\n\u{2022} Dark spots or strings floating in your vision\n\u{2022} Difficulty seeing at night\n\u{2022} Colors appearing faded\n\u{2022} Progressive vision loss\n\nEarly stages may have no symptoms, which is why regular eye exams are crucial for people with diabetes. Would you like to know more about prevention or treatment options?";

pub static RESPONSE_CATARACTS: &str = "Cataracts develop when the lens of your eye becomes cloudy. Prevention strategies include:\n\n\u{2022} Protecting your eyes from UV radiation with sunglasses\n\u{2022} Maintaining a healthy diet rich in antioxidants\n\u{2022} Avoiding smoking and excessive alcohol\n\u{2022} Managing diabetes and other health conditions\n\u{2022} Regular eye examinations\n\nWhile cataracts are often age-related and can't be completely prevented, these steps can help delay their onset.";

pub static RESPONSE_DRY_EYES: &str = "Dry eyes occur when your tears aren't able to provide adequate lubrication. Common causes include:\n\n\u{2022} Age-related changes\n\u{2022} Environmental factors (wind, dry air)\n\u{2022} Extended screen time\n\u{2022} Certain medications\n\u{2022} Medical conditions like Sj\u{f6}gren's syndrome\n\nTreatment options include artificial tears, lifestyle changes, and in some cases, prescription medications. Would you like specific recommendations for managing dry eyes?";

pub static RESPONSE_DEFAULT: &str = "Thank you for your question about eye health. Based on current medical knowledge, I recommend consulting with an ophthalmologist for personalized advice about your specific concerns. Regular eye exams are important for maintaining good vision and detecting problems early. Is there a specific aspect of eye health you'd like to know more about?";

/// User-side caption appended when an image is attached in the chat.
pub static IMAGE_UPLOAD_CAPTION: &str = "I've uploaded an eye image for analysis. Can you help me understand what this might show?";

/// The assistant's fixed answer to an attached image.
pub static IMAGE_UPLOAD_REPLY: &str = "I can see you've uploaded an image. While I can provide general information about eye conditions, I cannot diagnose specific conditions from images. For accurate medical analysis of eye images, I recommend using our AI Scanner feature or consulting with an ophthalmologist. Would you like me to explain what to look for in general eye health or guide you to our scanning tool?";

/// Text the simulated voice capture types into the input line.
pub static VOICE_TRANSCRIPT: &str = "What are the symptoms of glaucoma?";

// --- Scan Seed ---

/// The one and only analysis verdict. Revealed by every scan regardless of
/// the selected image.
pub static MOCK_SCAN_RESULT: ScanResult = ScanResult {
    disease: "Diabetic Retinopathy",
    severity: Severity::Moderate,
    confidence_pct: 87,
    symptoms: &[
        "Blurred or distorted vision",
        "Dark spots or strings floating in vision",
        "Difficulty seeing at night",
        "Colors appearing faded",
    ],
    prevention: &[
        "Control blood sugar levels",
        "Regular eye examinations",
        "Maintain healthy blood pressure",
        "Exercise regularly and eat a balanced diet",
    ],
    treatment: &[
        "Anti-VEGF injections",
        "Laser photocoagulation therapy",
        "Vitrectomy surgery (if severe)",
        "Regular monitoring by ophthalmologist",
    ],
};

/// Placeholder frame name recorded when the simulated camera capture is used
/// instead of a file.
pub static CAMERA_PLACEHOLDER: &str = "camera-frame (simulated capture)";

/// Medical disclaimer shown under the scan screen.
pub static MEDICAL_DISCLAIMER: &str = "Medical Disclaimer: This AI analysis is for informational purposes only and should not replace professional medical advice. Please consult with a qualified healthcare provider for proper diagnosis and treatment.";

// --- Profile Seed ---

/// Past scans listed on the profile screen.
pub static SCAN_HISTORY: &[ScanRecord] = &[
    ScanRecord { date: "2024-01-20", result: "Healthy", confidence_pct: 98 },
    ScanRecord { date: "2024-01-15", result: "Mild Dry Eyes", confidence_pct: 85 },
    ScanRecord { date: "2024-01-10", result: "Healthy", confidence_pct: 96 },
];

/// The original app hardcodes this figure next to the history; computing it
/// from the 2024 seed dates would drift daily, so the literal is kept.
pub const DAYS_SINCE_LAST_SCAN: u8 = 5;

/// Account details every session starts from.
pub fn seed_profile() -> Profile {
    Profile {
        name: "John Smith".to_string(),
        email: "john.smith@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        date_of_birth: "1985-06-15".to_string(),
        join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_five_seed_records() {
        assert_eq!(DOCTORS.len(), 5);
        assert!(DOCTORS.iter().all(|d| !d.specializations.is_empty()));
    }

    #[test]
    fn every_listed_specialization_exists_on_some_doctor() {
        for spec in SPECIALIZATIONS {
            assert!(
                DOCTORS.iter().any(|d| d.specializations.contains(spec)),
                "no doctor lists {spec}"
            );
        }
    }

    #[test]
    fn scan_history_dates_parse() {
        assert!(SCAN_HISTORY.iter().all(|r| r.parsed_date().is_some()));
    }
}
