//! Career-path reference tables and job-search tips shown under the form.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CareerTrack {
    pub name: &'static str,
    pub icon: &'static str,
    pub entry: &'static [&'static str],
    pub mid: &'static [&'static str],
    pub senior: &'static [&'static str],
    pub executive: &'static [&'static str],
    pub key_certifications: &'static str,
}

impl CareerTrack {
    /// (level label, roles) in ascending seniority.
    pub fn levels(&self) -> [(&'static str, &'static [&'static str]); 4] {
        [
            ("Entry Level", self.entry),
            ("Mid Level", self.mid),
            ("Senior Level", self.senior),
            ("Executive Level", self.executive),
        ]
    }
}

pub const CAREER_TRACKS: &[CareerTrack] = &[
    CareerTrack {
        name: "Cybersecurity",
        icon: "🔒",
        entry: &[
            "Security Operations Center (SOC) Analyst",
            "Cybersecurity Analyst",
            "Vulnerability Analyst",
            "IT Security Specialist",
        ],
        mid: &[
            "Penetration Tester",
            "Security Engineer",
            "Incident Responder",
            "Network Security Engineer",
            "Security Auditor",
        ],
        senior: &[
            "Security Architect",
            "Security Consultant",
            "Cloud Security Engineer",
            "Threat Hunter",
            "Digital Forensics Analyst",
        ],
        executive: &[
            "CISO (Chief Information Security Officer)",
            "Head of Security",
            "Security Director",
            "VP of Cybersecurity",
        ],
        key_certifications: "CEH, CISSP, CISM, OSCP, CompTIA Security+, CCSP, CISA",
    },
    CareerTrack {
        name: "AI/ML",
        icon: "🤖",
        entry: &[
            "Data Analyst",
            "AI/ML Engineer (Junior)",
            "Business Intelligence Analyst",
            "Data Annotator",
        ],
        mid: &[
            "Machine Learning Engineer",
            "Data Scientist",
            "NLP Specialist",
            "Computer Vision Engineer",
            "AI Developer",
        ],
        senior: &[
            "Senior ML Engineer",
            "Lead Data Scientist",
            "AI Researcher",
            "ML Architect",
            "AI Product Manager",
        ],
        executive: &[
            "Chief AI Officer",
            "Head of AI/ML",
            "VP of Data Science",
            "Director of AI Research",
        ],
        key_certifications:
            "TensorFlow Developer, AWS ML Specialty, Google Cloud AI, DeepLearning.AI, Data Science Professional",
    },
    CareerTrack {
        name: "Database",
        icon: "🗄️",
        entry: &[
            "Database Administrator (Junior)",
            "SQL Developer",
            "Data Entry Specialist",
            "Database Support Specialist",
        ],
        mid: &[
            "Database Administrator",
            "Database Developer",
            "ETL Developer",
            "Data Warehouse Analyst",
            "Business Intelligence Developer",
        ],
        senior: &[
            "Senior Database Administrator",
            "Database Architect",
            "Data Architect",
            "Data Engineer",
            "Big Data Specialist",
        ],
        executive: &[
            "Chief Data Officer",
            "Director of Data Management",
            "Head of Database Engineering",
            "VP of Data Infrastructure",
        ],
        key_certifications:
            "Oracle DBA, SQL Server, MySQL, AWS Database Specialty, Google Cloud Database",
    },
    CareerTrack {
        name: "Game Dev",
        icon: "🎮",
        entry: &[
            "Game Tester/QA Tester",
            "Junior Game Developer",
            "Game Programmer (Junior)",
            "Technical Artist (Junior)",
        ],
        mid: &[
            "Game Developer",
            "Game Programmer",
            "Game Designer",
            "Level Designer",
            "Technical Artist",
            "3D Artist",
        ],
        senior: &[
            "Senior Game Developer",
            "Lead Game Programmer",
            "Lead Game Designer",
            "Technical Director",
            "Art Director",
            "AR/VR Developer",
        ],
        executive: &[
            "Game Director",
            "Studio Head",
            "Creative Director",
            "Executive Producer",
            "CTO (Gaming Studio)",
        ],
        key_certifications:
            "Unity Certified, Unreal Engine, Game Design, 3D Modeling, AR/VR Development",
    },
    CareerTrack {
        name: "Business",
        icon: "💼",
        entry: &[
            "Business Analyst",
            "Marketing Associate",
            "Sales Representative",
            "HR Coordinator",
            "Financial Analyst (Junior)",
        ],
        mid: &[
            "Product Manager",
            "Marketing Manager",
            "Sales Manager",
            "HR Manager",
            "Operations Manager",
            "Business Development Manager",
        ],
        senior: &[
            "Senior Product Manager",
            "Director of Marketing",
            "Sales Director",
            "HR Director",
            "Operations Director",
            "Strategy Consultant",
            "Management Consultant",
        ],
        executive: &[
            "CEO",
            "CFO",
            "CMO",
            "CHRO",
            "COO",
            "General Manager",
            "Partner (Consulting)",
        ],
        key_certifications: "PMP, MBA, CFA, CPA, SHRM, Digital Marketing, Six Sigma",
    },
];

pub const JOB_SEARCH_TIPS: &[&str] = &[
    "Combine Technical + Business Skills for management roles",
    "Get Certified in your chosen field for better opportunities",
    "Build a Portfolio with real projects and case studies",
    "Network Actively on LinkedIn and industry events",
    "Stay Updated with latest technologies and trends",
    "Consider Remote Work options for global opportunities",
    "Focus on AI-Resistant Skills for long-term career security",
];

pub const HIGH_DEMAND_SKILLS: &[&str] = &[
    "AI/ML Engineering",
    "Cybersecurity",
    "Cloud Computing",
    "Data Science",
    "Digital Marketing",
    "Product Management",
    "Quantum Computing",
    "Edge AI",
    "AI Ethics & Governance",
    "Sustainable Tech",
];
