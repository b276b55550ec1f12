//! Response Normalizer: converts raw backend text into a guaranteed-shape result.
//!
//! strip code fences → strict parse → on failure, category-specific fallback.
//! Nothing here can fail; a parse error becomes `Outcome::Degraded`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::generation::fallback;
use crate::generation::models::{
    GenerationRequest, JobMatchAnalysis, JobMatchRequest, PostRequest, PostResult, Resume,
    ResumeRequest, StructuredResult,
};
use crate::generation::outcome::{Degradation, Outcome};

/// How much raw output to include in parse-failure logs.
const RAW_PREVIEW_CHARS: usize = 500;

pub fn normalize(raw: &str, request: &GenerationRequest) -> Outcome<StructuredResult> {
    match request {
        GenerationRequest::Resume(r) => normalize_resume(raw, r).map(StructuredResult::Resume),
        GenerationRequest::JobMatch(r) => {
            normalize_job_match(raw, r).map(StructuredResult::JobMatch)
        }
        GenerationRequest::Post(r) => normalize_post(raw, r).map(StructuredResult::Post),
    }
}

pub fn normalize_resume(raw: &str, request: &ResumeRequest) -> Outcome<Resume> {
    match parse_object::<Resume>(strip_code_fences(raw)) {
        Ok(resume) => Outcome::Ok(resume),
        Err(cause) => degrade("resume", raw, cause, |reason| {
            fallback::resume(request, reason)
        }),
    }
}

pub fn normalize_job_match(raw: &str, request: &JobMatchRequest) -> Outcome<JobMatchAnalysis> {
    match parse_object::<JobMatchAnalysis>(strip_code_fences(raw)) {
        Ok(analysis) => Outcome::Ok(analysis),
        Err(cause) => degrade("job-match", raw, cause, |reason| {
            fallback::job_match(request, reason)
        }),
    }
}

/// Posts are free text: the stripped answer is the post, provided something is left.
pub fn normalize_post(raw: &str, request: &PostRequest) -> Outcome<PostResult> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return degrade("post", raw, "no post text after stripping".to_string(), |reason| {
            fallback::post(request, reason)
        });
    }
    Outcome::Ok(PostResult::ok(text))
}

fn degrade<T>(
    task: &str,
    raw: &str,
    cause: String,
    build: impl FnOnce(&Degradation) -> T,
) -> Outcome<T> {
    warn!(
        "Failed to parse GAI {task} response ({cause}); raw (first {RAW_PREVIEW_CHARS} chars): {:?}",
        raw.chars().take(RAW_PREVIEW_CHARS).collect::<String>()
    );
    let reason = Degradation::ParseError(cause);
    let value = build(&reason);
    Outcome::Degraded(value, reason)
}

/// Parses `text` as a JSON object and then into `T`. Arrays and scalars are rejected
/// even when `T` could be filled positionally.
fn parse_object<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err(format!("expected a JSON object, found {}", json_kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// Any language tag on the opening fence is dropped with it.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the info string (e.g. `json`) up to the end of the opening fence line.
    let body = match stripped.find('\n') {
        Some(newline) if is_info_string(&stripped[..newline]) => &stripped[newline + 1..],
        Some(_) => stripped,
        None => stripped.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    let body = body.trim();
    body.strip_suffix("```").map(str::trim).unwrap_or(body)
}

fn is_info_string(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '+')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::models::{Education, Experience, PersonalInfo};

    fn resume_request() -> ResumeRequest {
        ResumeRequest {
            linkedin_url: "https://x.com/in/test".to_string(),
            target_role: Some("Platform Engineer".to_string()),
            user_profile: None,
        }
    }

    fn job_request() -> JobMatchRequest {
        JobMatchRequest {
            user_skills: vec!["Python".to_string(), "React".to_string()],
            job_requirements: "Looking for Python and AWS experience".to_string(),
            job_description: "Backend services".to_string(),
        }
    }

    fn sample_resume() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+1-555-0101".to_string(),
                location: "Austin, TX".to_string(),
                linkedin_url: "https://x.com/in/test".to_string(),
            },
            summary: "Platform engineer focused on reliability.".to_string(),
            experience: vec![Experience {
                title: "Platform Engineer".to_string(),
                company: "Acme".to_string(),
                duration: "2021 - Present".to_string(),
                achievements: vec!["Cut deploy time by 60%".to_string()],
            }],
            skills: vec!["Rust".to_string(), "Kubernetes".to_string()],
            education: vec![Education {
                degree: "BSc Computer Science".to_string(),
                institution: "UT Austin".to_string(),
                year: "2018".to_string(),
            }],
        }
    }

    fn sample_analysis() -> JobMatchAnalysis {
        JobMatchAnalysis {
            compatibility_score: 72,
            matching_skills: vec!["Python".to_string()],
            missing_skills: vec!["AWS".to_string()],
            recommendations: vec!["Earn an AWS certification".to_string()],
            strength_areas: vec!["Backend development".to_string()],
            improvement_areas: vec!["Cloud infrastructure".to_string()],
            overall_assessment: "Solid fit with a cloud gap.".to_string(),
        }
    }

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_single_line() {
        assert_eq!(strip_code_fences("```json {\"a\": 1}```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_code_fences_keeps_first_line_that_is_content() {
        let input = "```{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(input), "{\"a\": 1}");
    }

    #[test]
    fn test_resume_round_trips() {
        let original = sample_resume();
        let raw = serde_json::to_string_pretty(&original).unwrap();
        assert_eq!(
            normalize_resume(&raw, &resume_request()),
            Outcome::Ok(original)
        );
    }

    #[test]
    fn test_job_match_round_trips() {
        let original = sample_analysis();
        let raw = serde_json::to_string(&original).unwrap();
        assert_eq!(
            normalize_job_match(&raw, &job_request()),
            Outcome::Ok(original)
        );
    }

    #[test]
    fn test_fenced_output_normalizes_like_unfenced() {
        let raw = serde_json::to_string_pretty(&sample_resume()).unwrap();
        let fenced = format!("```json\n{raw}\n```");
        assert_eq!(
            normalize_resume(&fenced, &resume_request()),
            normalize_resume(&raw, &resume_request())
        );

        let raw = serde_json::to_string(&sample_analysis()).unwrap();
        let fenced = format!("```\n{raw}\n```");
        assert_eq!(
            normalize_job_match(&fenced, &job_request()),
            normalize_job_match(&raw, &job_request())
        );
    }

    #[test]
    fn test_garbage_resume_degrades_with_parse_error() {
        let outcome = normalize_resume("Sure! Here is your resume:", &resume_request());
        assert!(matches!(
            outcome.degradation(),
            Some(Degradation::ParseError(_))
        ));
        let resume = outcome.into_inner();
        assert!(resume.summary.contains("Platform Engineer"));
        assert_eq!(resume.personal_info.linkedin_url, "https://x.com/in/test");
    }

    #[test]
    fn test_array_is_not_accepted_as_resume() {
        let outcome = normalize_resume("[]", &resume_request());
        match outcome.degradation() {
            Some(Degradation::ParseError(cause)) => assert!(cause.contains("an array")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_resume_is_accepted_as_parsed() {
        let outcome = normalize_resume(r#"{"summary": "Short"}"#, &resume_request());
        assert!(outcome.degradation().is_none());
        assert_eq!(outcome.value().summary, "Short");
        assert!(outcome.value().skills.is_empty());
    }

    #[test]
    fn test_comma_separated_skills_keep_the_backend_resume() {
        let raw = r#"{"personalInfo":{"name":"Jane Real"},"summary":"Real summary","skills":"Python, Rust"}"#;
        let outcome = normalize_resume(raw, &resume_request());
        assert!(outcome.degradation().is_none());
        let resume = outcome.into_inner();
        assert_eq!(resume.personal_info.name, "Jane Real");
        assert_eq!(resume.summary, "Real summary");
        assert_eq!(resume.skills, vec!["Python", "Rust"]);
    }

    #[test]
    fn test_object_assessment_keeps_the_backend_score() {
        let raw = r#"{"compatibilityScore":70,"matchingSkills":["Python"],"overallAssessment":{"text":"good"}}"#;
        let outcome = normalize_job_match(raw, &job_request());
        assert!(outcome.degradation().is_none());
        let analysis = outcome.into_inner();
        assert_eq!(analysis.compatibility_score, 70);
        assert_eq!(analysis.overall_assessment, r#"{"text":"good"}"#);
    }

    #[test]
    fn test_job_match_parse_fallback_uses_substring_matching() {
        let outcome = normalize_job_match("not json", &job_request());
        assert!(matches!(
            outcome.degradation(),
            Some(Degradation::ParseError(_))
        ));
        let analysis = outcome.into_inner();
        assert_eq!(analysis.matching_skills, vec!["Python".to_string()]);
        assert!(!analysis.matching_skills.contains(&"React".to_string()));
        assert_eq!(analysis.compatibility_score, 20);
    }

    #[test]
    fn test_post_is_stripped_text() {
        let request = PostRequest {
            topic: "Rust".to_string(),
            details: None,
            tone: None,
        };
        let outcome = normalize_post("\n  Shipping Rust in production 🚀 #Rust  \n", &request);
        assert_eq!(
            outcome,
            Outcome::Ok(PostResult::ok("Shipping Rust in production 🚀 #Rust"))
        );
    }

    #[test]
    fn test_fence_only_post_degrades() {
        let request = PostRequest {
            topic: "Rust".to_string(),
            details: None,
            tone: None,
        };
        let outcome = normalize_post("```\n```", &request);
        assert!(matches!(
            outcome.degradation(),
            Some(Degradation::ParseError(_))
        ));
        assert!(outcome.value().post.contains("#Rust"));
    }

    #[test]
    fn test_dispatch_tags_result_with_task_kind() {
        let request = GenerationRequest::JobMatch(job_request());
        let outcome = normalize("{}", &request);
        assert_eq!(outcome.value().kind(), request.kind());
        assert!(outcome.degradation().is_none());
    }
}
