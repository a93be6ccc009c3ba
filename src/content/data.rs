//! Portfolio data tables.
//!
//! Everything here is read-only content. The pre-rendered command strings
//! are shown byte-for-byte, so keep box edges and spacing as they are.

use super::{Experience, Profile, Project};

pub const PROFILE: Profile = Profile {
    name: "AMULYA KUMAR SENAPATI",
    title: "Frontend Engineer | React Developer",
    email: "amulyakumar662@gmail.com",
    phone: "+91-7438850195",
    linkedin: "https://www.linkedin.com/in/amulya-kumar-senapati-a64243225",
};

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Josh Talks",
        role: "Software Developer",
        period: "Nov 2024 – Present",
        location: "Gurugram",
        highlights: &[
            "Built and maintained scalable React.js + TypeScript frontend for 300K+ monthly active users",
            "Engineered responsive, mobile-first UI components with Tailwind CSS",
            "Reduced page load times by 40% through code splitting, lazy loading, and image optimization",
            "Contributed to CI/CD pipeline improvements and participated in code reviews",
        ],
    },
    Experience {
        company: "LawyerDesk",
        role: "Software Developer",
        period: "Apr 2024 – Nov 2024",
        location: "Vishakapatnam",
        highlights: &[
            "Developed Advocase AI — an AI-powered legal SaaS tool using React, TypeScript, and Zustand",
            "Implemented real-time collaboration features using WebSockets",
            "Built reusable component library with Storybook, reducing dev time by 30%",
            "Integrated Stripe for subscription billing and payment management",
        ],
    },
    Experience {
        company: "Canan Technologies",
        role: "Jr. Software Developer",
        period: "Jul 2023 – Apr 2024",
        location: "Bengaluru",
        highlights: &[
            "Led frontend development of the Police Information System (PIS) used by 5,000+ officers",
            "Built ASR (Automated Speech Recognition) platform interface with real-time audio visualization",
            "Reduced unnecessary API calls by 60% using React Query caching strategies",
            "Implemented role-based access control (RBAC) for multi-tenant dashboards",
        ],
    },
    Experience {
        company: "Newton School",
        role: "Full Stack Developer (Trainee)",
        period: "Jun 2022 – Jun 2023",
        location: "Bengaluru",
        highlights: &[
            "Completed intensive full-stack development bootcamp with focus on MERN stack",
            "Built 10+ production-ready projects including e-commerce and social media platforms",
            "Achieved top 5% ranking among 500+ students in coding assessments",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        key: "pis",
        name: "PIS",
        full_name: "Payroll Information System",
        description: "A scalable payroll management platform designed to automate salary processing, attendance tracking, leave management, tax calculations, and payslip generation for large organizations.",
        tech: &["React.js", "TypeScript", "Redux", "Node.js", "PostgreSQL", "Docker"],
    },
    Project {
        key: "advocase",
        name: "Advocase AI",
        full_name: "Advocase AI — Legal SaaS",
        description: "AI-powered legal tech platform enabling lawyers to draft documents, manage cases, and collaborate in real-time with AI assistance.",
        tech: &["React.js", "TypeScript", "Zustand", "WebSockets", "Stripe", "Tailwind CSS"],
    },
    Project {
        key: "asr",
        name: "ASR Platform",
        full_name: "Automated Speech Recognition Platform",
        description: "Real-time speech-to-text platform with audio visualization, supporting multiple Indian languages for government use.",
        tech: &["React.js", "Web Audio API", "WebSockets", "Node.js", "Python"],
    },
    Project {
        key: "school",
        name: "School Management",
        full_name: "School Management System",
        description: "End-to-end school administration platform handling student enrollment, attendance tracking, grade management, and parent communication.",
        tech: &["Next.js", "TypeScript", "MongoDB", "Tailwind CSS", "Chart.js"],
    },
    Project {
        key: "pos",
        name: "POS",
        full_name: "Point of Sale System",
        description: "Modern point-of-sale system for retail businesses with inventory management, sales analytics, and multi-location support.",
        tech: &["React.js", "Node.js", "Express", "MongoDB", "Material UI"],
    },
];

const HELP: &str = "Available commands:
  about       — Who am I?
  skills      — My tech stack
  experience  — Work history
  projects    — Things I've built
  project <n> — Detail on a project (pis, advocase, asr, school, pos)
  education   — My academic background
  contact     — Get in touch
  social      — Find me online
  clear       — Clear the terminal
  help        — Show this message";

const ABOUT: &str = "┌─────────────────────────────────────────────┐
│  AMULYA KUMAR SENAPATI                      │
│  Full Stack Engineer | React Developer      │
│  📍 Odisha, India                           |
├─────────────────────────────────────────────┤
│  Product-focused Engineer with 4+ years of  │
│  experience building scalable web           │
│  & mobile apps.                             |
| React.js • Next.js • React Native           │
│  TypeScript • JavaScript • Node.js          |
|                                             │
│  ⚡ Improved performance by 40% via optimization │
│  ⚡ Reduced API calls by 60% using smart caching │
│  ⚡ Built systems serving 300K+ monthly users    |
│  ⚡ Designed scalable cloud deployments      |
└─────────────────────────────────────────────┘";

const SKILLS_TEXT: &str = "╔══════════════════════════════════════════════╗
║  TECH STACK                                   ║
╠══════════════════════════════════════════════╣
║                                               ║
║  ▸ FRONTEND                                   ║
║    React.js • Next.js • TypeScript            ║
║    JavaScript (ES6+) • Redux • Zustand        ║
║    HTML5 • CSS3 • Tailwind CSS                ║
║    Material UI • Framer Motion • WebSockets   ║
║                                               ║
║  ▸ BACKEND                                    ║
║    Node.js • Express.js • REST APIs           ║
║    GraphQL • Socket.io • Redis                ║
║    Authentication (JWT, OAuth)                ║
║    MongoDB • PostgreSQL • Supabase            ║
║                                               ║
║  ▸ CLOUD & DEVOPS                             ║
║    Google Cloud Platform (GCP) • Firebase     ║
║    AWS (S3, DynamoDB) • Cloudflare            ║
║    Docker • CI/CD • Vercel • Render           ║
║                                               ║
║  ▸ TOOLS                                      ║
║    Git • GitHub • Webpack • Vite              ║
║    Jenkins • Jira • Figma • VS Code           ║
║    Chrome DevTools                            ║
║                                               ║
╚══════════════════════════════════════════════╝";

const EDUCATION_TEXT: &str = "┌─────────────────────────────────────────────┐
│  🎓 EDUCATION                                │
├─────────────────────────────────────────────┤
│  Bachelor of Education (B.Ed)                │
│  Acharya Nagarjuna University                │
│  2018 – 2020 | Guntur, Andhra Pradesh        │
│                                              │
│  Bachelor of Science (B.Sc)                  │
│  North Odisha University                     │
│  2015 – 2018 | Odisha, India                 │
└─────────────────────────────────────────────┘";

const SOCIAL: &str = "┌─────────────────────────────────────────────┐
│  🌐 FIND ME ONLINE                           │
├─────────────────────────────────────────────┤
│  📧 amulyakumar662@gmail.com                 │
│  📞 +91-7438850195                           │
│  🔗 linkedin.com/in/amulya-kumar-senapati-a64243225/  │
└─────────────────────────────────────────────┘";

// The fallback number here differs from PROFILE.phone in the source data.
// Both are kept as written.
const CONTACT: &str = "📬 Type your message below or scroll down to the contact form!
   Alternatively, reach me at:
   📧 amulyakumar662@gmail.com
   📞 +91-9304480737";

/// Static command table, keyed by lower-case command name.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", HELP),
    ("about", ABOUT),
    ("skills", SKILLS_TEXT),
    ("education", EDUCATION_TEXT),
    ("social", SOCIAL),
    ("contact", CONTACT),
];

/// Lines shown when a session opens with the banner enabled.
pub const BANNER: &[&str] = &[
    "Welcome to Amulya's Terminal Portfolio v1.0.0",
    "Type \"help\" to see available commands.\n",
];
