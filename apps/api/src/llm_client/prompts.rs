// Review prompt templates.
// Both instructions forbid a numeric score: the percentage comes from the
// deterministic matcher, never from the model.

/// HR-style qualitative review of a résumé against a job description.
pub const REVIEW_INSTRUCTION: &str = "\
You are an experienced HR professional with Tech Experience in Data Science, \
Full Stack Development, Big Data Engineering, and DevOps.

Please review the provided resume against the job description. Provide:
1. Key strengths and alignment with the role
2. Areas for improvement or missing elements
3. Specific suggestions to better tailor the resume
4. Overall assessment of fit for the position

Do NOT provide any numerical match percentage.
Be specific and provide actionable advice.";

/// ATS-scanner style analysis of missing keywords and improvements.
pub const MATCH_INSTRUCTION: &str = "\
You are a skilled ATS (Applicant Tracking System) scanner and HR professional.
Evaluate the resume against the job description and provide:

1. Missing keywords and skills from the job description
2. Specific suggestions to improve ATS compatibility
3. Strengths and alignment with the role
4. Final thoughts and recommendations

Do NOT provide any numerical match percentage.
Focus on actionable insights and specific improvements.";

/// Assembles the full prompt: instruction, résumé, then the JD as extra context.
pub fn build_prompt(instruction: &str, resume_text: &str, job_description: &str) -> String {
    format!("{instruction}\nResume Content:\n{resume_text}\nAdditional Context:\n{job_description}")
}
