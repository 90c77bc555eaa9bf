// All prompt templates for the job search, refinement and tailoring providers.
// Placeholders are `{name}` tokens replaced before sending.

/// System prompt shared by search and refinement.
pub const SEARCH_SYSTEM: &str = "You are a meticulous technical recruiter with live web search. \
    You only report job postings you have verified on the posting page itself. \
    You return structured JSON exactly as requested.";

/// Multi-company search. Replace: {resumes}, {location}, {relocate},
/// {sponsorship}, {companies}, {sources}, {json_only}
pub const SEARCH_PROMPT_TEMPLATE: &str = r#"Find job postings that match the resume(s) below at each target company.

RESUME(S):
{resumes}

PREFERENCES:
- Current location: {location} (City, State, Country; use it for filtering)
- Willing to relocate: {relocate}
- Needs sponsorship: {sponsorship}

TARGET COMPANIES:
{companies}

PRIORITIZED SOURCES (may be empty):
{sources}

PROTOCOL:
1. For each company, find DIRECT URLs to specific, relevant postings.
2. Open each URL with a second, targeted search. That page is the single source of truth.
3. Discard a posting when any gate fails on its source-of-truth page:
   - Experience: the resume does not meet the minimum years required.
   - Core skills: the resume does not show the top 3-5 required skills.
   - Sponsorship: sponsorship is needed and the posting explicitly denies it.
   - Location: not willing to relocate and the posting is neither in the same city/state nor remote;
     willing to relocate and the posting is outside the current country.
4. For every key requirement, quote the exact sentence from the posting as `justificationSnippet`.
5. Prefer one or two strong matches over several weak ones.
6. `aliasIdentifier` is one lowercase word naming the parent company (YouTube -> "google").
7. If nothing qualifies, return an empty array.

Return a JSON ARRAY:
[
  {
    "companyName": "Company Name",
    "aliasIdentifier": "company",
    "analysisSummary": "Why these postings match the resume.",
    "jobs": [
      {
        "jobTitle": "Senior Cloud Engineer",
        "applicationLink": "https://careers.company.com/jobs/123",
        "jobDetails": "Short summary of responsibilities.",
        "postedDate": "2 days ago",
        "requiredYearsOfExperience": "5+ years",
        "location": "Redmond, WA, USA",
        "sponsorshipOffered": "Yes",
        "keyRequirements": [
          {"requirement": "Azure", "justificationSnippet": "5+ years of experience with Microsoft Azure."}
        ]
      }
    ]
  }
]

{json_only}"#;

/// Single-company refinement. Replace: {company}, {resumes}, {feedback},
/// {sources}, {json_only}
pub const REFINE_PROMPT_TEMPLATE: &str = r#"A previous search for "{company}" did not satisfy the user. Search again for this company only, applying the user's feedback.

RESUME(S):
{resumes}

TARGET COMPANY:
{company}

USER FEEDBACK:
"{feedback}"

PRIORITIZED SOURCES (may be empty):
{sources}

PROTOCOL:
1. Find DIRECT posting URLs, then open each with a second, targeted search; that page is the single source of truth.
2. Apply the experience, core-skill, sponsorship and location gates to every source-of-truth page.
3. Make the results reflect the feedback (e.g. "too junior" means drop junior roles).
4. Quote the exact posting sentence behind each key requirement as `justificationSnippet`.
5. `aliasIdentifier` is one lowercase word naming the parent company.
6. If nothing qualifies, return the object with an empty "jobs" array.

Return ONE JSON OBJECT:
{
  "companyName": "{company}",
  "aliasIdentifier": "company",
  "analysisSummary": "How the feedback shaped this search.",
  "jobs": [
    {
      "jobTitle": "Principal Software Engineer, Backend",
      "applicationLink": "https://careers.company.com/jobs/456",
      "jobDetails": "Short summary of responsibilities.",
      "postedDate": "1 day ago",
      "requiredYearsOfExperience": "8+ years",
      "location": "Remote, USA",
      "sponsorshipOffered": "Not Mentioned",
      "keyRequirements": [
        {"requirement": "Distributed Systems", "justificationSnippet": "Deep knowledge of distributed systems."}
      ]
    }
  ]
}

{json_only}"#;

/// System prompt for the creative tailoring pass.
pub const TAILOR_SYSTEM: &str = "You are an expert resume writer. \
    You rewrite resumes to fit a specific role without inventing experience.";

/// Tailoring pass. Replace: {job_title}, {job_details}, {resume}
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"Tailor the resume below for this application.

Change ONLY the professional summary, the skills section and the experience bullet points so they align with the job.
If a page image is attached, use it to judge layout and density: the result must still fit on one page.
Respond with the full text of the tailored resume and nothing else. No JSON, no commentary.

JOB TITLE: {job_title}

JOB DETAILS:
{job_details}

ORIGINAL RESUME:
{resume}"#;

/// System prompt for deterministic scoring.
pub const ANALYZE_SYSTEM: &str = "You are an ATS and recruiting analyst. \
    You score resumes strictly by the rubric you are given, deterministically.";

/// Scoring pass. Replace: {job_title}, {job_details}, {resume}, {rubric}, {json_only}
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Score the resume against the job using ONLY the rubric. Identical inputs must produce identical scores.

JOB TITLE:
{job_title}

JOB DETAILS:
{job_details}

RESUME:
{resume}

RUBRIC:
{rubric}

The ATS score covers both structural parseability and keyword alignment with the job.

Return a JSON OBJECT:
{
  "matchScore": 85,
  "explanation": "Numbered list of the score drivers, strengths and weaknesses.",
  "atsScore": 92,
  "atsExplanation": "Parseability and keyword alignment.",
  "scoringBreakdown": [
    {"category": "Core Technical & Experience Alignment", "score": 55, "maxScore": 60, "weight": 60},
    {"category": "Education & Secondary Skills", "score": 10, "maxScore": 15, "weight": 15},
    {"category": "Content Quality & Impact", "score": 12, "maxScore": 15, "weight": 15},
    {"category": "Structural Adherence & Parseability", "score": 8, "maxScore": 10, "weight": 10}
  ]
}

{json_only}"#;

/// System prompt for the resume chat.
pub const CHAT_SYSTEM: &str = "You are a career coach helping the user refine a tailored resume. \
    You know their original resume, the tailored version and the target job. \
    Be concise and professional. Answer questions, suggest edits and help brainstorm improvements.";

/// Latest chat turn. Replace: {original}, {tailored}, {job_details}, {message}
pub const CHAT_TURN_TEMPLATE: &str = r#"My original resume:
---
{original}
---

The tailored version:
---
{tailored}
---

The job description:
---
{job_details}
---

My question: {message}"#;
