//! Static portfolio data. Edits here are content changes, not code
//! changes — nothing below carries logic.

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub links: &'static [Link],
}

pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct Experience {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub detail: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub year: &'static str,
    pub stack: &'static str,
    pub link: &'static str,
    pub desc: &'static str,
    /// This project's demo opens the assistant widget.
    pub interactive: bool,
}

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub link: &'static str,
}

pub struct Photo {
    pub src: &'static str,
    pub caption: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Abhishek Mehra",
    tagline: "Software Engineer based in Tokyo.",
    links: &[
        Link { label: "Email", url: "mailto:abhishekmehra1010@gmail.com" },
        Link { label: "GitHub", url: "https://github.com/mehraverse" },
        Link { label: "LinkedIn", url: "https://linkedin.com/in/abhishekmehra19" },
    ],
};

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        period: "2022–Present",
        role: "Software Engineer",
        company: "Nomura Securities, Tokyo",
        detail: "Production support for Java-based front-office equity systems (90% alert \
                 reduction). Built RAG tool for semantic search of past incidents.",
    },
    Experience {
        period: "2020–2022",
        role: "Software Engineer",
        company: "Yokogawa Electric, Tokyo",
        detail: "Led CRM rollout for India/UAE. Built REST APIs (Spring Boot) and Python \
                 migration scripts for global data consolidation.",
    },
    Experience {
        period: "2019",
        role: "Data Science Intern",
        company: "Yokogawa Electric, Tokyo",
        detail: "Prototyped semantic search using Elasticsearch and AWS Comprehend.",
    },
    Experience {
        period: "2016–2020",
        role: "B.Tech (Civil Engineering)",
        company: "IIT Ropar",
        detail: "Department Rank 4. Focused on computational engineering and deep learning.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Mercari Shopping Agent",
        year: "2025",
        stack: "Python, OpenAI API",
        link: "https://github.com/mehraverse/mercari_agent_project",
        desc: "Autonomous agent using OpenAI function calling to navigate Mercari Japan. \
               Filters listings by budget and quality.",
        interactive: true,
    },
    Project {
        title: "AI Agent System",
        year: "2025",
        stack: "FastAPI, AWS ECS, Docker",
        link: "https://github.com/mehraverse/ai-agent-system",
        desc: "Scalable backend for secure code execution. Supports multi-user concurrent \
               sessions with 100% uptime on AWS.",
        interactive: false,
    },
    Project {
        title: "Indus Express",
        year: "2025",
        stack: "Next.js, Tailwind CSS",
        link: "https://indus.express",
        desc: "Indian news, simple, no ads or paywalls.",
        interactive: false,
    },
    Project {
        title: "Abstractive Summarizer",
        year: "2020",
        stack: "TensorFlow, NLP",
        link: "https://drive.google.com/file/d/1zxVeL_D94YU4AZKfFQFJ-VG0H_axhtnm/view",
        desc: "LSTM Seq2Seq model for abstractive text summarization. Verified by ROUGE \
               metrics.",
        interactive: false,
    },
];

pub const SKILLS: &[&str] = &[
    "Java",
    "Spring Boot",
    "Python",
    "SQL",
    "AWS",
    "Bash",
    "Docker",
    "Kubernetes",
    "PyTorch",
    "Elasticsearch",
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Neural Networks & Deep Learning",
        issuer: "deeplearning.ai",
        link: "https://www.coursera.org/account/accomplishments/certificate/XRMVXTZ83LE3",
    },
    Certification {
        title: "Data Structures & Algorithms",
        issuer: "UC San Diego",
        link: "https://www.coursera.org/account/accomplishments/certificate/NWNFCD4NW3ZZ",
    },
];

pub const LEADERSHIP: &[&str] = &[
    "Founder, Indian Philosophy Collective (Tokyo): Building a community for cross-cultural dialogue.",
    "Batch Representative (2018-19): Liaison between students & professors.",
    "Sports (2017): Central Defender, IIT Madras Sports Meet.",
    "Cultural (2018): Editor, Filmmaking Team at IIT Roorkee.",
];

pub const PHOTOS: &[Photo] = &[
    Photo { src: "/assets/Nubra.jpg", caption: "Nubra" },
    Photo { src: "/assets/Zao.jpg", caption: "Zao" },
    Photo { src: "/assets/Genoa.jpg", caption: "Genoa" },
    Photo { src: "/assets/Interlaken.jpg", caption: "Interlaken" },
];
