// All LLM prompt constants for the generation tasks.
// Reuses cross-cutting fragments from llm_client::prompts.
//
// Placeholders are `{name}` tokens filled by prompt_builder::render. Any other
// brace (the JSON scaffolds below) is sent to the model verbatim.

/// Persona line for resume generation; the JSON-only instruction is appended to it.
pub const RESUME_PERSONA: &str = "You are an expert resume writer and career coach.";

/// Resume prompt template.
/// Replace: {user_context}, {linkedin_url}, {target_role}, {json_only}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"The user context contains the user's LinkedIn profile.
Given the user context and target role, generate a comprehensive, ATS-friendly resume in JSON format.

Linkedin Profile: {user_context}
LinkedIn URL: {linkedin_url}
Target Role: {target_role}

Generate a resume with the following structure (skip the field if not available):
{
    "personalInfo": {
        "name": "Full Name",
        "email": "email@example.com",
        "phone": "+1-XXX-XXX-XXXX",
        "location": "City, State",
        "linkedinUrl": "{linkedin_url}"
    },
    "summary": "Professional summary tailored to the target role",
    "experience": [
        {
            "title": "Job Title",
            "company": "Company Name",
            "duration": "Start - End",
            "achievements": ["Achievement 1", "Achievement 2"]
        }
    ],
    "skills": ["Skill1", "Skill2", "Skill3"],
    "education": [
        {
            "degree": "Degree Name",
            "institution": "Institution Name",
            "year": "Year"
        }
    ]
}

Focus on:
1. Extracting key information from the LinkedIn profile
2. Tailoring content to the target role
3. Using action verbs and quantifiable achievements
4. Ensuring ATS compatibility
5. Professional formatting and structure

{json_only}"#;

pub const JOB_MATCH_PERSONA: &str =
    "You are an expert career counselor and job matching specialist.";

/// Job compatibility prompt template.
/// Replace: {user_skills}, {job_requirements}, {job_description}, {json_only}
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"Analyze the compatibility between a candidate's skills and a job opportunity.

User Skills: {user_skills}
Job Requirements: {job_requirements}
Job Description: {job_description}

Provide a comprehensive analysis in JSON format:
{
    "compatibilityScore": 85,
    "matchingSkills": ["skill1", "skill2"],
    "missingSkills": ["skill3", "skill4"],
    "recommendations": [
        "Recommendation 1",
        "Recommendation 2"
    ],
    "strengthAreas": ["area1", "area2"],
    "improvementAreas": ["area3", "area4"],
    "overallAssessment": "Detailed assessment text"
}

Focus on:
1. Accurate skill matching and gap analysis
2. Actionable recommendations for skill development
3. Realistic compatibility scoring (0-100)
4. Specific areas of strength and improvement
5. Professional career guidance

{json_only}"#;

/// LinkedIn post prompt template. Sent as a single user message; the answer is free text.
/// Replace: {topic}, {details}, {tone}
pub const POST_PROMPT_TEMPLATE: &str = r#"You are an expert LinkedIn content creator and social media strategist. Create an engaging
LinkedIn post that will drive professional engagement and networking.

Topic: {topic}
Details: {details}
Tone: {tone}

Generate a LinkedIn post with the following characteristics:
- Professional and engaging tone
- Appropriate use of emojis (2-3 maximum)
- Relevant hashtags (3-5)
- Call-to-action for engagement
- 150-300 words optimal length
- Industry-appropriate content

Structure the post to include:
1. Hook/Opening statement
2. Main content with value
3. Personal insight or experience
4. Call-to-action
5. Relevant hashtags

Return the complete post content as a single string."#;

pub const DEFAULT_TARGET_ROLE: &str = "Software engineer";
pub const NO_PROFILE_CONTEXT: &str = "No additional context provided";
pub const NO_POST_DETAILS: &str = "No additional details provided";
