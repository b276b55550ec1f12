//! Deterministic fallback content, one builder per task.
//!
//! Each builder takes the `Degradation` that triggered it and produces content
//! specific to that category, so "backend absent", "backend failed" and
//! "backend answered garbage" never look the same to a caller.

use crate::generation::models::{
    Education, Experience, JobMatchAnalysis, JobMatchRequest, PersonalInfo, PostRequest,
    PostResult, Resume, ResumeRequest,
};
use crate::generation::outcome::Degradation;
use crate::generation::prompts::DEFAULT_TARGET_ROLE;

/// Ceiling for the keyword-overlap score.
const HEURISTIC_SCORE_CAP: u32 = 85;
/// Points per matched skill in the keyword-overlap score.
const HEURISTIC_POINTS_PER_MATCH: u32 = 20;
const STRENGTH_AREA_LIMIT: usize = 3;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

pub fn resume(request: &ResumeRequest, reason: &Degradation) -> Resume {
    match reason {
        Degradation::BackendUnavailable => offline_resume(request),
        Degradation::BackendError(_) => failed_resume(request),
        Degradation::ParseError(_) => unparsed_resume(request),
    }
}

fn offline_resume(request: &ResumeRequest) -> Resume {
    let role = request.target_role().unwrap_or(DEFAULT_TARGET_ROLE);
    Resume {
        personal_info: PersonalInfo {
            name: "Mock Generated Resume".to_string(),
            email: "mock@example.com".to_string(),
            phone: "+1-555-0123".to_string(),
            location: "San Francisco, CA".to_string(),
            linkedin_url: request.linkedin_url.clone(),
        },
        summary: format!(
            "Mock professional summary for {role} role. \
             This is generated when LinkedIn GAI is not available."
        ),
        experience: vec![Experience {
            title: request.target_role().unwrap_or("Software Engineer").to_string(),
            company: "Mock Company".to_string(),
            duration: "2022 - Present".to_string(),
            achievements: strings(&["Mock achievement 1", "Mock achievement 2"]),
        }],
        skills: strings(&["Python", "JavaScript", "React", "Node.js"]),
        education: vec![Education {
            degree: "Mock Degree".to_string(),
            institution: "Mock University".to_string(),
            year: "2022".to_string(),
        }],
    }
}

fn unparsed_resume(request: &ResumeRequest) -> Resume {
    let expertise = request.target_role().unwrap_or("technology");
    Resume {
        personal_info: PersonalInfo {
            name: "Generated from LinkedIn".to_string(),
            email: "user@example.com".to_string(),
            phone: "+1-555-0123".to_string(),
            location: "San Francisco, CA".to_string(),
            linkedin_url: request.linkedin_url.clone(),
        },
        summary: format!(
            "Professional with expertise in {expertise}, generated from LinkedIn profile \
             analysis using LinkedIn GAI gateway."
        ),
        experience: vec![Experience {
            title: "Senior Software Engineer".to_string(),
            company: "Tech Innovation Inc.".to_string(),
            duration: "2022 - Present".to_string(),
            achievements: strings(&[
                "Developed scalable web applications using modern technologies",
                "Improved system performance by 40% through optimization",
            ]),
        }],
        skills: strings(&["Python", "JavaScript", "React", "Node.js", "SQL"]),
        education: vec![Education {
            degree: "Bachelor of Science in Computer Science".to_string(),
            institution: "University".to_string(),
            year: "2022".to_string(),
        }],
    }
}

fn failed_resume(request: &ResumeRequest) -> Resume {
    Resume {
        personal_info: PersonalInfo {
            name: "Error in Generation".to_string(),
            email: "error@example.com".to_string(),
            phone: "+1-555-0000".to_string(),
            location: "Unknown".to_string(),
            linkedin_url: request.linkedin_url.clone(),
        },
        summary: "Error occurred during resume generation".to_string(),
        experience: Vec::new(),
        skills: Vec::new(),
        education: Vec::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Job match
// ────────────────────────────────────────────────────────────────────────────

pub fn job_match(request: &JobMatchRequest, reason: &Degradation) -> JobMatchAnalysis {
    match reason {
        Degradation::BackendUnavailable => offline_job_match(request),
        Degradation::BackendError(_) => failed_job_match(),
        Degradation::ParseError(_) => unparsed_job_match(request),
    }
}

/// Skills whose lowercase form occurs anywhere in the lowercase requirements, in input order.
/// Blank skills never match.
pub fn matching_skills(user_skills: &[String], job_requirements: &str) -> Vec<String> {
    let requirements = job_requirements.to_lowercase();
    user_skills
        .iter()
        .filter(|skill| !skill.trim().is_empty())
        .filter(|skill| requirements.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// `min(85, matches * 20)`.
pub fn heuristic_score(matches: usize) -> u32 {
    let matches = u32::try_from(matches).unwrap_or(u32::MAX);
    matches
        .saturating_mul(HEURISTIC_POINTS_PER_MATCH)
        .min(HEURISTIC_SCORE_CAP)
}

fn unparsed_job_match(request: &JobMatchRequest) -> JobMatchAnalysis {
    let matching = matching_skills(&request.user_skills, &request.job_requirements);
    JobMatchAnalysis {
        compatibility_score: heuristic_score(matching.len()),
        strength_areas: matching.iter().take(STRENGTH_AREA_LIMIT).cloned().collect(),
        matching_skills: matching,
        missing_skills: strings(&["Advanced Analytics", "Leadership"]),
        recommendations: strings(&[
            "Consider developing missing technical skills",
            "Highlight relevant experience in your application",
        ]),
        improvement_areas: strings(&["Communication", "Project Management"]),
        overall_assessment: "Good compatibility with room for skill development".to_string(),
    }
}

fn offline_job_match(request: &JobMatchRequest) -> JobMatchAnalysis {
    let matching = matching_skills(&request.user_skills, &request.job_requirements);
    JobMatchAnalysis {
        compatibility_score: heuristic_score(matching.len()),
        strength_areas: matching.iter().take(STRENGTH_AREA_LIMIT).cloned().collect(),
        matching_skills: matching,
        missing_skills: Vec::new(),
        recommendations: strings(&[
            "Connect the LinkedIn GAI backend for a full compatibility analysis",
        ]),
        improvement_areas: Vec::new(),
        overall_assessment: "Offline estimate based on keyword overlap; \
                             LinkedIn GAI is not available."
            .to_string(),
    }
}

fn failed_job_match() -> JobMatchAnalysis {
    JobMatchAnalysis {
        compatibility_score: 0,
        matching_skills: Vec::new(),
        missing_skills: Vec::new(),
        recommendations: strings(&["Error occurred during analysis"]),
        strength_areas: Vec::new(),
        improvement_areas: Vec::new(),
        overall_assessment: "Analysis failed due to technical error".to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Post
// ────────────────────────────────────────────────────────────────────────────

pub fn post(request: &PostRequest, reason: &Degradation) -> PostResult {
    match reason {
        Degradation::BackendUnavailable => PostResult::ok(offline_post(request)),
        Degradation::BackendError(cause) => PostResult {
            success: true,
            post: templated_post(request),
            error: Some(format!("LinkedIn GAI service error: {cause}")),
        },
        Degradation::ParseError(_) => PostResult::ok(templated_post(request)),
    }
}

/// Only spaces are removed; other whitespace is kept as typed.
fn hashtag(topic: &str) -> String {
    topic.replace(' ', "")
}

fn templated_post(request: &PostRequest) -> String {
    let topic = &request.topic;
    let details = request
        .details()
        .unwrap_or("Sharing thoughts on this important topic.");
    format!(
        "🚀 Excited to share insights about {topic}!\n\
         \n\
         {details}\n\
         \n\
         Key takeaways:\n\
         • Innovation drives growth\n\
         • Collaboration leads to success\n\
         • Continuous learning is essential\n\
         \n\
         What are your thoughts on {topic}? I'd love to hear your perspectives in the comments!\n\
         \n\
         #{tag} #Professional #LinkedIn #Technology",
        tag = hashtag(topic),
    )
}

fn offline_post(request: &PostRequest) -> String {
    let topic = &request.topic;
    let details = request
        .details()
        .unwrap_or("Sharing thoughts on this important topic.");
    format!(
        "[Offline draft] {topic}\n\
         \n\
         {details}\n\
         \n\
         This draft was prepared without LinkedIn GAI. Review and personalize it before posting.\n\
         \n\
         #{tag} #Professional",
        tag = hashtag(topic),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_request(role: Option<&str>) -> ResumeRequest {
        ResumeRequest {
            linkedin_url: "https://x.com/in/test".to_string(),
            target_role: role.map(str::to_string),
            user_profile: None,
        }
    }

    fn job_request() -> JobMatchRequest {
        JobMatchRequest {
            user_skills: vec!["Python".to_string(), "React".to_string()],
            job_requirements: "Looking for Python and AWS experience".to_string(),
            job_description: "Data platform team".to_string(),
        }
    }

    fn post_request() -> PostRequest {
        PostRequest {
            topic: "Remote Work".to_string(),
            details: None,
            tone: None,
        }
    }

    fn all_reasons() -> [Degradation; 3] {
        [
            Degradation::BackendUnavailable,
            Degradation::BackendError("timeout".to_string()),
            Degradation::ParseError("expected value".to_string()),
        ]
    }

    #[test]
    fn test_offline_resume_echoes_url_and_default_role() {
        let resume = resume(&resume_request(None), &Degradation::BackendUnavailable);
        assert_eq!(resume.personal_info.linkedin_url, "https://x.com/in/test");
        assert!(resume.summary.contains("Software engineer"));
        assert_eq!(resume.personal_info.name, "Mock Generated Resume");
    }

    #[test]
    fn test_unparsed_resume_echoes_target_role() {
        let resume = resume(
            &resume_request(Some("Staff Data Engineer")),
            &Degradation::ParseError("eof".to_string()),
        );
        assert!(resume.summary.contains("Staff Data Engineer"));
        assert_eq!(resume.personal_info.name, "Generated from LinkedIn");
    }

    #[test]
    fn test_resume_categories_are_distinct() {
        let request = resume_request(None);
        let [a, b, c] = all_reasons().map(|reason| resume(&request, &reason));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_matching_skills_is_case_insensitive_substring() {
        let matched = matching_skills(&job_request().user_skills, "looking for PYTHON and aws");
        assert_eq!(matched, vec!["Python".to_string()]);
    }

    #[test]
    fn test_blank_skills_never_match() {
        let skills = vec![String::new(), "   ".to_string(), "Go".to_string()];
        assert!(matching_skills(&skills, "python").is_empty());

        let request = JobMatchRequest {
            user_skills: skills,
            job_requirements: "python".to_string(),
            job_description: String::new(),
        };
        let analysis = job_match(&request, &Degradation::ParseError("eof".to_string()));
        assert_eq!(analysis.compatibility_score, 0);
        assert!(analysis.strength_areas.is_empty());
    }

    #[test]
    fn test_unparsed_job_match_reports_python_not_react() {
        let analysis = job_match(&job_request(), &Degradation::ParseError("eof".to_string()));
        assert_eq!(analysis.matching_skills, vec!["Python".to_string()]);
        assert!(!analysis.matching_skills.contains(&"React".to_string()));
        assert_eq!(analysis.compatibility_score, 20);
        assert_eq!(analysis.strength_areas, vec!["Python".to_string()]);
    }

    #[test]
    fn test_heuristic_score_caps_at_85() {
        assert_eq!(heuristic_score(0), 0);
        assert_eq!(heuristic_score(1), 20);
        assert_eq!(heuristic_score(4), 80);
        assert_eq!(heuristic_score(5), 85);
        assert_eq!(heuristic_score(50), 85);
    }

    #[test]
    fn test_strength_areas_take_first_three_matches() {
        let request = JobMatchRequest {
            user_skills: ["Rust", "Go", "SQL", "Kafka", "Java"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            job_requirements: "rust go sql kafka java".to_string(),
            job_description: String::new(),
        };
        let analysis = job_match(&request, &Degradation::ParseError("eof".to_string()));
        assert_eq!(analysis.compatibility_score, 85);
        assert_eq!(analysis.strength_areas, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_job_match_categories_are_distinct() {
        let request = job_request();
        let [a, b, c] = all_reasons().map(|reason| job_match(&request, &reason));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert!(a.overall_assessment.starts_with("Offline estimate"));
        assert_eq!(b.compatibility_score, 0);
    }

    #[test]
    fn test_templated_post_uses_topic_hashtag() {
        let result = post(&post_request(), &Degradation::ParseError("empty".to_string()));
        assert!(result.success);
        assert!(result.post.contains("Excited to share insights about Remote Work!"));
        assert!(result.post.contains("#RemoteWork #Professional #LinkedIn #Technology"));
        assert!(result.post.contains("Sharing thoughts on this important topic."));
    }

    #[test]
    fn test_post_categories_are_distinct() {
        let request = post_request();
        let [a, b, c] = all_reasons().map(|reason| post(&request, &reason));
        assert!(a.post.starts_with("[Offline draft]"));
        assert_eq!(b.error.as_deref(), Some("LinkedIn GAI service error: timeout"));
        assert!(c.error.is_none());
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hashtag_removes_only_spaces() {
        assert_eq!(hashtag("Remote Work"), "RemoteWork");
        assert_eq!(hashtag("Remote\tWork  Life"), "Remote\tWorkLife");
    }
}
