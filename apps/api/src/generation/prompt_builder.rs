//! Prompt Builder: turns a request into the message list sent to the invoker.
//!
//! Pure and deterministic: the same request always yields the same messages.

use crate::generation::models::{GenerationRequest, JobMatchRequest, PostRequest, ResumeRequest};
use crate::generation::prompts::{
    DEFAULT_TARGET_ROLE, JOB_MATCH_PERSONA, JOB_MATCH_PROMPT_TEMPLATE, NO_POST_DETAILS,
    NO_PROFILE_CONTEXT, POST_PROMPT_TEMPLATE, RESUME_PERSONA, RESUME_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, RETURN_JSON_ONLY};
use crate::llm_client::Message;

pub fn build_messages(request: &GenerationRequest) -> Vec<Message> {
    match request {
        GenerationRequest::Resume(r) => resume_messages(r),
        GenerationRequest::JobMatch(r) => job_match_messages(r),
        GenerationRequest::Post(r) => post_messages(r),
    }
}

pub fn resume_messages(request: &ResumeRequest) -> Vec<Message> {
    // Embedded as flat text: the backend only consumes strings.
    let user_context = request
        .user_profile
        .as_ref()
        .filter(|profile| !profile.is_empty())
        .and_then(|profile| serde_json::to_string(profile).ok())
        .unwrap_or_else(|| NO_PROFILE_CONTEXT.to_string());
    let target_role = request.target_role().unwrap_or(DEFAULT_TARGET_ROLE);

    let prompt = render(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("user_context", user_context.as_str()),
            ("linkedin_url", request.linkedin_url.as_str()),
            ("target_role", target_role),
            ("json_only", RETURN_JSON_ONLY),
        ],
    );

    vec![
        Message::system(format!("{RESUME_PERSONA} {JSON_ONLY_SYSTEM}")),
        Message::user(prompt),
    ]
}

pub fn job_match_messages(request: &JobMatchRequest) -> Vec<Message> {
    let user_skills = request.user_skills.join(", ");

    let prompt = render(
        JOB_MATCH_PROMPT_TEMPLATE,
        &[
            ("user_skills", user_skills.as_str()),
            ("job_requirements", request.job_requirements.as_str()),
            ("job_description", request.job_description.as_str()),
            ("json_only", RETURN_JSON_ONLY),
        ],
    );

    vec![
        Message::system(format!("{JOB_MATCH_PERSONA} {JSON_ONLY_SYSTEM}")),
        Message::user(prompt),
    ]
}

pub fn post_messages(request: &PostRequest) -> Vec<Message> {
    let prompt = render(
        POST_PROMPT_TEMPLATE,
        &[
            ("topic", request.topic.as_str()),
            ("details", request.details().unwrap_or(NO_POST_DETAILS)),
            ("tone", request.tone()),
        ],
    );

    vec![Message::user(prompt)]
}

/// Single-pass `{name}` substitution. Unknown brace groups are copied through and
/// substituted values are never rescanned.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let substitution = after.find('}').and_then(|end| {
            let name = &after[..end];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (end, *value))
        });

        match substitution {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
