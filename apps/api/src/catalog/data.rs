//! Built-in catalog tables. Salaries are monthly figures in AED.

use super::AiImpact;

/// Raw details row, one per job title.
pub(super) struct JobSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub salary: (u32, u32),
    pub certificates: &'static [&'static str],
    pub ai_impact: AiImpact,
}

/// Skill key to job titles, in declared order.
pub(super) const SKILL_MAP: &[(&str, &[&str])] = &[
    // Technical Skills
    (
        "python",
        &[
            "Data Analyst",
            "Software Developer",
            "Data Scientist",
            "AI Researcher",
            "ML Engineer",
        ],
    ),
    ("java", &["Software Developer", "Backend Engineer", "Android Developer"]),
    ("javascript", &["Frontend Developer", "Full Stack Developer"]),
    ("c++", &["Software Developer", "Systems Engineer", "Game Developer"]),
    ("excel", &["Business Analyst", "Financial Analyst", "Data Analyst", "Operations Manager"]),
    ("design", &["UI/UX Designer", "Graphic Designer", "Product Designer"]),
    (
        "marketing",
        &[
            "Digital Marketing Specialist",
            "SEO Specialist",
            "Marketing Manager",
            "Brand Manager",
        ],
    ),
    ("communication", &["Project Manager", "Business Analyst", "HR Manager", "Sales Manager"]),
    ("sql", &["Data Analyst", "Database Administrator", "Business Intelligence Analyst"]),
    ("cloud", &["Cloud Engineer", "DevOps Engineer", "Solutions Architect"]),
    ("machine learning", &["ML Engineer", "Data Scientist", "AI Researcher"]),
    ("ai", &["AI Researcher", "ML Engineer", "AI Product Manager"]),
    ("html", &["Frontend Developer", "Web Developer", "Full Stack Developer", "UI/UX Designer"]),
    ("css", &["Frontend Developer", "Web Developer", "Full Stack Developer", "UI/UX Designer"]),

    // Cybersecurity Skills
    (
        "cybersecurity",
        &[
            "Cybersecurity Analyst",
            "Security Engineer",
            "Penetration Tester",
            "Security Architect",
        ],
    ),
    (
        "security",
        &[
            "Cybersecurity Analyst",
            "Security Engineer",
            "Penetration Tester",
            "Security Architect",
        ],
    ),
    ("penetration testing", &["Penetration Tester", "Ethical Hacker"]),
    ("ethical hacking", &["Penetration Tester", "Ethical Hacker"]),
    ("network security", &["Network Security Engineer", "Security Engineer"]),
    ("cloud security", &["Cloud Security Engineer", "Security Architect"]),

    // Database Skills
    ("database", &["Database Administrator", "Data Engineer", "Database Developer"]),
    ("oracle", &["Database Administrator", "ERP Consultant"]),
    ("mysql", &["Database Administrator", "Backend Engineer"]),
    ("postgresql", &["Database Administrator", "Backend Engineer"]),
    ("mongodb", &["Database Administrator", "Backend Engineer", "Full Stack Developer"]),
    (
        "nosql",
        &[
            "Database Administrator",
            "Backend Engineer",
            "Data Engineer",
            "Full Stack Developer",
        ],
    ),

    // AI/ML Skills
    ("deep learning", &["ML Engineer", "AI Researcher", "Data Scientist"]),
    ("nlp", &["ML Engineer", "AI Researcher", "Data Scientist"]),
    ("tensorflow", &["ML Engineer", "AI Researcher"]),
    ("pytorch", &["ML Engineer", "AI Researcher"]),

    // Game Development Skills
    ("game development", &["Game Developer", "Game Designer", "Game Programmer"]),
    ("unity", &["Game Developer", "AR/VR Developer"]),
    ("unreal", &["Game Developer", "Game Programmer"]),

    // Business Skills
    ("leadership", &["Project Manager", "Product Manager", "Operations Manager", "HR Director"]),
    ("strategy", &["Strategy Consultant", "Business Development Manager", "Product Manager"]),
    ("sales", &["Sales Manager", "Account Executive", "Business Development Manager"]),
    ("finance", &["Financial Analyst", "Investment Banker", "Financial Controller", "CFO"]),
    ("accounting", &["Accountant", "Financial Controller", "Auditor"]),
    ("management", &["Project Manager", "Operations Manager", "Product Manager"]),

    // Web Development Skills
    ("react", &["Frontend Developer", "Full Stack Developer"]),
    ("angular", &["Frontend Developer", "Full Stack Developer"]),
    ("vue", &["Frontend Developer"]),
    ("node.js", &["Backend Engineer", "Full Stack Developer"]),
    ("docker", &["DevOps Engineer", "Cloud Engineer"]),
    ("aws", &["Cloud Engineer", "DevOps Engineer", "Solutions Architect"]),
];

pub(super) const JOB_SEEDS: &[JobSeed] = &[
    JobSeed {
        title: "Data Analyst",
        description: "Analyze datasets to extract actionable insights for business decisions.",
        salary: (8000, 15000),
        certificates: &[
            "Google Data Analytics",
            "Microsoft Excel Expert",
            "Tableau Desktop Specialist",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Software Developer",
        description: "Design, develop, and maintain software applications and systems.",
        salary: (10000, 20000),
        certificates: &[
            "AWS Developer",
            "Oracle Java Certification",
            "Microsoft Certified: Azure Developer",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "UI/UX Designer",
        description:
            "Create user-centered designs for digital products and improve user experience.",
        salary: (9000, 16000),
        certificates: &[
            "Adobe XD Certification",
            "Google UX Design Professional",
            "Figma UI/UX Design",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Digital Marketing Specialist",
        description: "Plan and execute online marketing campaigns across various digital channels.",
        salary: (8000, 14000),
        certificates: &[
            "Google Ads Certification",
            "HubSpot Content Marketing",
            "Facebook Blueprint",
        ],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Business Analyst",
        description: "Analyze business processes and recommend solutions to improve efficiency.",
        salary: (9000, 17000),
        certificates: &["IIBA ECBA", "PMI-PBA", "CBAP"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Financial Analyst",
        description:
            "Analyze financial data to support investment decisions and financial planning.",
        salary: (10000, 18000),
        certificates: &["CFA Level 1", "CPA", "Financial Modeling & Valuation Analyst"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Frontend Developer",
        description: "Build responsive and interactive user interfaces for web applications.",
        salary: (9000, 17000),
        certificates: &[
            "React Certification",
            "Google IT Automation",
            "Frontend Developer Nanodegree",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Backend Engineer",
        description: "Develop server-side logic, APIs, and database architecture.",
        salary: (10000, 20000),
        certificates: &["AWS Developer", "Node.js Certification", "Spring Professional"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Full Stack Developer",
        description: "Work on both client-side and server-side development of web applications.",
        salary: (12000, 22000),
        certificates: &[
            "Full Stack Web Developer",
            "Microsoft Azure Developer",
            "MERN Stack Developer",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Cybersecurity Analyst",
        description: "Monitor networks for security breaches and investigate security incidents.",
        salary: (13000, 26000),
        certificates: &["CEH", "CompTIA Security+", "CySA+", "GSEC"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Security Engineer",
        description: "Design and implement security systems to protect organizational data.",
        salary: (14000, 27000),
        certificates: &["CISSP", "CCSP", "SANS GIAC", "OSCP"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Penetration Tester",
        description:
            "Ethically hack systems to identify vulnerabilities before malicious attackers.",
        salary: (15000, 30000),
        certificates: &["OSCP", "GPEN", "CEH Master", "Pentest+"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "ML Engineer",
        description: "Build, deploy, and maintain machine learning models in production.",
        salary: (15000, 28000),
        certificates: &[
            "TensorFlow Developer",
            "AWS ML Specialty",
            "Google Professional ML Engineer",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Data Scientist",
        description:
            "Extract insights from complex data using statistical analysis and machine learning.",
        salary: (16000, 30000),
        certificates: &[
            "Data Science Professional Certificate",
            "IBM Data Science",
            "Microsoft Certified: Data Scientist",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "AI Researcher",
        description: "Research and develop new AI algorithms and models.",
        salary: (18000, 35000),
        certificates: &[
            "DeepLearning.AI Specialization",
            "Stanford AI Graduate Certificate",
            "MIT AI Research",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Game Developer",
        description: "Create video games and interactive entertainment experiences.",
        salary: (12000, 25000),
        certificates: &[
            "Unity Certified Developer",
            "Unreal Engine Certification",
            "Game Development Specialization",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Product Manager",
        description:
            "Define product vision, strategy, and roadmap for successful product delivery.",
        salary: (20000, 40000),
        certificates: &["Pragmatic Marketing", "Product School Certification", "PMI-ACP"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Sales Manager",
        description: "Lead sales team, develop strategies, and drive revenue growth.",
        salary: (18000, 35000),
        certificates: &["Salesforce Certified", "SPIN Selling", "Professional Sales Certificate"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "HR Manager",
        description:
            "Manage human resources functions including recruitment and employee relations.",
        salary: (14000, 28000),
        certificates: &["SHRM-CP", "PHR", "HR Management Certificate"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Cloud Engineer",
        description: "Design, deploy, and maintain cloud infrastructure and services.",
        salary: (15000, 25000),
        certificates: &[
            "AWS Solutions Architect",
            "Google Cloud Professional",
            "Azure Solutions Architect",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Database Administrator",
        description: "Install, configure, and maintain database management systems.",
        salary: (10000, 18000),
        certificates: &["Oracle DBA", "SQL Server Certification", "MySQL Database Administration"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Systems Engineer",
        description: "Design and maintain IT systems infrastructure and network architecture.",
        salary: (11000, 19000),
        certificates: &["Cisco CCNA", "Microsoft Azure Admin", "Red Hat Certified Engineer"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Graphic Designer",
        description: "Create visual concepts and designs for digital and print media.",
        salary: (8000, 14000),
        certificates: &[
            "Adobe Creative Cloud Certified",
            "Graphic Design Specialization",
            "Digital Arts Certificate",
        ],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "SEO Specialist",
        description: "Optimize websites to improve search engine rankings and organic traffic.",
        salary: (8000, 13000),
        certificates: &["Google Analytics Certification", "HubSpot SEO", "SEMrush SEO Toolkit"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Project Manager",
        description: "Plan, execute, and close projects while managing teams and resources.",
        salary: (12000, 25000),
        certificates: &["PMP", "PRINCE2", "Certified Scrum Master"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "DevOps Engineer",
        description: "Automate and optimize software development and deployment processes.",
        salary: (14000, 24000),
        certificates: &[
            "Docker Certified Associate",
            "AWS DevOps Engineer",
            "Kubernetes Administrator",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "AI Product Manager",
        description: "Manage AI/ML product development from conception to launch.",
        salary: (25000, 50000),
        certificates: &[
            "AI Product Management",
            "Machine Learning Basics",
            "Product Strategy for AI",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Security Architect",
        description: "Design comprehensive security frameworks and solutions for organizations.",
        salary: (20000, 40000),
        certificates: &["CISSP-ISSAP", "SABSA", "TOGAF", "CISSP"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Ethical Hacker",
        description: "Perform authorized penetration testing to identify system vulnerabilities.",
        salary: (14000, 30000),
        certificates: &["CEH", "OSCP", "Pentest+", "GPEN"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Database Developer",
        description: "Design and implement database solutions and optimize queries.",
        salary: (12000, 24000),
        certificates: &[
            "Oracle Database Developer",
            "SQL Server Developer",
            "PostgreSQL Certification",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Game Designer",
        description: "Design game mechanics, storylines, and user experiences.",
        salary: (11000, 22000),
        certificates: &[
            "Game Design Specialization",
            "Level Design Certificate",
            "Narrative Design",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Game Programmer",
        description: "Write code for game functionality, physics, and AI behavior.",
        salary: (13000, 27000),
        certificates: &["C++ Game Development", "Unity Scripting", "Unreal Engine C++ Developer"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "AR/VR Developer",
        description: "Develop augmented and virtual reality applications and experiences.",
        salary: (15000, 30000),
        certificates: &["Unity XR Development", "Oculus Developer", "AR Core/ARKit Certification"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Android Developer",
        description: "Develop mobile applications for Android devices.",
        salary: (12000, 23000),
        certificates: &[
            "Google Android Developer",
            "Kotlin Certification",
            "Android Development Nanodegree",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Solutions Architect",
        description: "Design comprehensive technology solutions for business problems.",
        salary: (20000, 40000),
        certificates: &["AWS Solutions Architect Pro", "TOGAF", "Azure Solutions Architect Expert"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Marketing Manager",
        description: "Develop and execute marketing strategies to promote products/services.",
        salary: (15000, 30000),
        certificates: &["Digital Marketing Pro", "Google Marketing Platform", "HubSpot Marketing"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Brand Manager",
        description: "Develop and maintain brand strategy, identity, and positioning.",
        salary: (15000, 30000),
        certificates: &["Brand Management", "Marketing Strategy", "Digital Brand Management"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Business Development Manager",
        description: "Identify and pursue new business opportunities and partnerships.",
        salary: (17000, 35000),
        certificates: &[
            "Business Development Professional",
            "Strategic Partnerships",
            "Sales Strategy",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Strategy Consultant",
        description: "Advise companies on strategic decisions and business transformation.",
        salary: (25000, 50000),
        certificates: &[
            "Management Consulting",
            "Strategic Planning",
            "Business Strategy Specialization",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Account Executive",
        description: "Manage client accounts and drive sales through relationship building.",
        salary: (15000, 30000),
        certificates: &["Sales Certification", "Account Management", "CRM Specialist"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Financial Controller",
        description: "Manage accounting operations and financial reporting for organizations.",
        salary: (22000, 45000),
        certificates: &["CPA", "CMA", "Chartered Accountant"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Management Consultant",
        description: "Provide expert advice to improve business performance and operations.",
        salary: (25000, 55000),
        certificates: &["McKinsey Problem Solving", "BCG Strategy", "Bain Certificate"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Supply Chain Manager",
        description: "Manage logistics, inventory, and supply chain operations.",
        salary: (16000, 32000),
        certificates: &["CSCP", "SCPro", "Logistics Management"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Investment Banker",
        description: "Advise on financial transactions, mergers, and capital raising.",
        salary: (30000, 80000),
        certificates: &["CFA", "Series 7", "Investment Banking Certificate"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Business Intelligence Analyst",
        description: "Analyze business data to support decision making with insights.",
        salary: (12000, 25000),
        certificates: &[
            "Tableau Desktop Specialist",
            "Power BI Certification",
            "Qlik Sense Business Analyst",
        ],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Talent Acquisition Specialist",
        description: "Source, recruit, and hire top talent for organizations.",
        salary: (10000, 20000),
        certificates: &["Talent Acquisition", "Recruitment Certification", "LinkedIn Recruiter"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Risk Analyst",
        description: "Identify and analyze potential business and financial risks.",
        salary: (14000, 28000),
        certificates: &["FRM", "Risk Management Professional", "Operational Risk Management"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Compliance Officer",
        description: "Ensure company compliance with laws, regulations, and standards.",
        salary: (15000, 30000),
        certificates: &["Compliance Certification", "Regulatory Affairs", "AML/KYC Certification"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Startup Founder",
        description: "Establish and grow a new business venture from concept to scale.",
        salary: (0, 100000),
        certificates: &["Entrepreneurship", "Venture Capital", "Startup Management"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Scrum Master",
        description: "Facilitate agile development processes and remove team impediments.",
        salary: (13000, 26000),
        certificates: &["CSM", "PSM", "SAFe Scrum Master"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Accountant",
        description: "Prepare and examine financial records and ensure accuracy.",
        salary: (9000, 18000),
        certificates: &["CPA", "ACCA", "Chartered Accountant"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Auditor",
        description: "Examine financial statements for accuracy and compliance.",
        salary: (11000, 22000),
        certificates: &["CIA", "Internal Audit", "ISO Auditor"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Market Research Analyst",
        description: "Study market conditions to inform business decisions and strategy.",
        salary: (10000, 20000),
        certificates: &["Market Research", "Data Analysis", "Qualitative Research"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Learning & Development Specialist",
        description: "Design and implement employee training and development programs.",
        salary: (11000, 22000),
        certificates: &["ATD Certification", "Training Professional", "Instructional Design"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Content Manager",
        description: "Develop and manage digital content strategy across platforms.",
        salary: (10000, 20000),
        certificates: &["Content Marketing", "SEO Writing", "Digital Content Strategy"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Procurement Manager",
        description: "Manage purchasing processes and supplier relationships.",
        salary: (14000, 28000),
        certificates: &["CPSM", "Procurement Professional", "Supply Chain Management"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Innovation Manager",
        description: "Drive innovation and new product development initiatives.",
        salary: (18000, 35000),
        certificates: &["Innovation Management", "Design Thinking", "Product Innovation"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Web Developer",
        description: "Build and maintain websites and web applications.",
        salary: (10000, 20000),
        certificates: &["Web Development", "Frontend Technologies", "Full Stack Web Dev"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "ERP Consultant",
        description: "Implement and customize ERP systems for businesses.",
        salary: (15000, 30000),
        certificates: &["SAP Certification", "Oracle ERP", "Microsoft Dynamics"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "HR Director",
        description: "Lead human resources department and develop HR strategy.",
        salary: (30000, 60000),
        certificates: &["SHRM-SCP", "HR Executive", "Strategic HR Management"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "CFO",
        description: "Oversee financial operations, strategy, and planning.",
        salary: (50000, 150000),
        certificates: &["CPA", "MBA Finance", "Chartered Financial Analyst"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Recruitment Consultant",
        description: "Connect employers with qualified candidates for job placements.",
        salary: (10000, 25000),
        certificates: &["Recruitment Professional", "Talent Sourcing", "Executive Search"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Corporate Trainer",
        description: "Deliver training programs to employees on various topics.",
        salary: (11000, 22000),
        certificates: &["Training Delivery", "Instructional Design", "Corporate Education"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Logistics Manager",
        description: "Manage transportation, distribution, and logistics operations.",
        salary: (14000, 28000),
        certificates: &["CLTD", "Logistics Management", "Supply Chain Operations"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Business Consultant",
        description: "Provide specialized business advice and solutions to clients.",
        salary: (20000, 45000),
        certificates: &["Business Consulting", "Industry Specialization", "Management Advisory"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Product Designer",
        description: "Design user experiences and interfaces for products and services.",
        salary: (15000, 30000),
        certificates: &["Product Design", "User Research", "Interaction Design"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Operations Manager",
        description: "Oversee daily business operations and improve efficiency.",
        salary: (16000, 32000),
        certificates: &["Six Sigma", "Operations Management", "Lean Management"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Network Security Engineer",
        description: "Secure network infrastructure and manage security systems.",
        salary: (14000, 28000),
        certificates: &["CCNP Security", "Palo Alto Networks", "Checkpoint CCSA"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "Cloud Security Engineer",
        description: "Secure cloud environments and implement cloud security controls.",
        salary: (16000, 35000),
        certificates: &["CCSP", "AWS Security Specialty", "Azure Security Engineer"],
        ai_impact: AiImpact::Medium,
    },
    JobSeed {
        title: "3D Artist",
        description: "Create 3D models, textures, and animations for games/media.",
        salary: (10000, 20000),
        certificates: &["Autodesk Maya", "Blender", "Substance Painter"],
        ai_impact: AiImpact::High,
    },
    JobSeed {
        title: "Mobile App Developer",
        description: "Develop applications for iOS and Android mobile devices.",
        salary: (12000, 25000),
        certificates: &["Google Mobile Web Specialist", "Apple Developer", "React Native"],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "Computer Vision Engineer",
        description: "Develop AI systems that can interpret and understand visual information.",
        salary: (17000, 32000),
        certificates: &[
            "OpenCV Certification",
            "Computer Vision Specialization",
            "Deep Learning for CV",
        ],
        ai_impact: AiImpact::Low,
    },
    JobSeed {
        title: "CISO",
        description: "Executive responsible for organization's information security program.",
        salary: (50000, 150000),
        certificates: &["CISSP", "CISM", "CRISC", "CISA"],
        ai_impact: AiImpact::Low,
    },
];
