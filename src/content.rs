//! Literal resume content.
//!
//! All text that ends up in the PDF is defined here as static data.  [`sections`] returns the
//! section table in page order; the header and closing lines are plain constants.

use crate::richtext::Span;
use crate::style::StyleRole;

/// Name shown as the document title.
pub const NAME: &str = "Dan Gibson";

/// Tagline shown under the title.
pub const TAGLINE: &str = "Senior Drupal Developer/Architect | Senior Full-Stack Developer | DevOps Engineer | AI Solutions Architect";

/// Closing line at the end of the document.
pub const CLOSING_NOTE: &str = "References and detailed project portfolios available upon request";

/// Gap after most sections, in points (0.1 in).
pub const SECTION_GAP: f64 = 7.2;

/// Gap after the expertise and highlights sections, in points (0.15 in).
pub const WIDE_SECTION_GAP: f64 = 10.8;

/// One displayed unit of resume content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentItem {
    /// A single line of text.
    Line(&'static str),
    /// A bold label followed by a description.
    Labeled {
        label: &'static str,
        text: &'static str,
    },
}

impl ContentItem {
    /// Every literal string carried by the item.
    pub fn literals(&self) -> Vec<&'static str> {
        match *self {
            ContentItem::Line(text) => vec![text],
            ContentItem::Labeled { label, text } => vec![label, text],
        }
    }

    /// Spans for the item, prefixed with `marker`.
    pub fn spans(&self, marker: BulletMarker) -> Vec<Span> {
        let mut spans = Vec::with_capacity(3);
        match marker {
            BulletMarker::None => {}
            BulletMarker::Plain => spans.push(Span::new("\u{2022} ")),
            BulletMarker::Bold => {
                spans.push(Span::new("\u{2022}").bold());
                spans.push(Span::new(" "));
            }
        }

        match *self {
            ContentItem::Line(text) => spans.push(Span::new(text)),
            ContentItem::Labeled { label, text } => {
                spans.push(Span::new(format!("{label}:")).bold());
                spans.push(Span::new(format!(" {text}")));
            }
        }
        spans
    }
}

/// Glyph printed in front of each list entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulletMarker {
    /// No marker.
    #[default]
    None,
    /// A regular-weight bullet.
    Plain,
    /// A bold bullet.
    Bold,
}

/// A heading followed by its entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Heading text.
    pub heading: &'static str,
    /// Style role used for the entries.
    pub role: StyleRole,
    /// Marker printed in front of each entry.
    pub marker: BulletMarker,
    /// Entries in display order.
    pub items: Vec<ContentItem>,
    /// Gap emitted after the section, in points.
    pub gap_after: f64,
}

impl Section {
    fn bullets(heading: &'static str, marker: BulletMarker, items: Vec<ContentItem>) -> Self {
        Self {
            heading,
            role: StyleRole::Bullet,
            marker,
            items,
            gap_after: SECTION_GAP,
        }
    }

    fn with_gap(mut self, gap_after: f64) -> Self {
        self.gap_after = gap_after;
        self
    }
}

const fn labeled(label: &'static str, text: &'static str) -> ContentItem {
    ContentItem::Labeled { label, text }
}

const SUMMARY: &str = "Accomplished Full-Stack Developer and DevOps Engineer with 15+ years of experience delivering enterprise-scale \
    web applications, cloud infrastructure, and AI-powered solutions. Expert in Drupal CMS (6-10), Angular, Docker, CI/CD automation, \
    AWS, API security, and system administration. Proven track record leading complex migrations, architecting scalable systems, \
    and implementing cutting-edge technologies including Llama AI models, OAuth 2.0 security, and comprehensive testing frameworks. \
    Specialized in federal government and healthcare sectors with deep expertise in WCAG compliance, security hardening, and \
    performance optimization.";

const COMPETENCIES: &[ContentItem] = &[
    labeled("Web Development", "Drupal 6-10 | Angular 2-16+ | React | jQuery | TypeScript | PHP | Node.js | RESTful APIs | GraphQL | JSON:API"),
    labeled("DevOps & Infrastructure", "Docker (Lando/Docksal) | Kubernetes | Jenkins | GitHub Actions | Terraform | Ansible | AWS (EC2, RDS, S3, Lambda, CloudWatch) | Azure | Linux Administration (Ubuntu, CentOS, RHEL)"),
    labeled("CI/CD & Automation", "Jenkins Pipelines | GitHub Actions | GitLab CI | Acquia Pipelines | Bash/Shell Scripting | Infrastructure as Code | Automated Deployment"),
    labeled("Security", "OAuth 2.0 | OpenID Connect | JWT | API Security | SimpleSAMLphp | SAML 2.0 | SSL/TLS | fail2ban | iptables | Security Hardening"),
    labeled("Testing & QA", "Behat (BDD) | Playwright | Cypress | K6 | JMeter | Gatling | Load Testing | Performance Testing | Integration Testing"),
    labeled("Databases", "MySQL | PostgreSQL | MariaDB | MongoDB | Redis | Memcached | Query Optimization | Replication"),
    labeled("AI & Machine Learning", "Llama 2/3 | Code Llama | LangChain | LlamaIndex | RAG Architecture | Model Fine-tuning | Ollama"),
    labeled("Monitoring & Observability", "Prometheus | Grafana | ELK Stack | Datadog | New Relic | CloudWatch | Nagios"),
];

const EXPERTISE: &[ContentItem] = &[
    labeled("Drupal CMS Mastery", "Enterprise-level implementations covering Drupal 6-10. Expert in complex migrations, custom module/theme development, API integrations, SSO via SimpleSAML, and USWDS/Bootstrap theming."),
    labeled("System Administration & DevOps", "15+ years managing production Linux infrastructure (Ubuntu, CentOS, RHEL). Expert in LAMP/LEMP stacks, performance tuning, security hardening, backup/disaster recovery, and achieving 99.99% uptime."),
    labeled("API Security Implementation", "Architected OAuth 2.0/OIDC authentication systems, JWT-based APIs, zero-trust security architectures, and achieved PCI DSS compliance. Reduced unauthorized access by 95%."),
    labeled("CI/CD Pipeline Architecture", "Built Jenkins and GitHub Actions pipelines reducing deployment time by 70-90%. Implemented automated testing, security scanning, and zero-downtime deployments."),
    labeled("Performance & Load Testing", "Conducted comprehensive testing with K6, JMeter, Gatling. Reduced response times by 60% and validated 10x peak traffic capacity. Expert in profiling, optimization, and bottleneck resolution."),
    labeled("AI Solutions Development", "Deployed Llama AI models (2/3/Code Llama) for enterprise knowledge assistants, code review automation, and content generation. Built RAG systems with LangChain/LlamaIndex achieving 95%+ accuracy."),
];

const PORTFOLIO: &[ContentItem] = &[
    labeled("Quantum Improvements Consulting, LLC", "8(m) woman-owned small business specializing in training solutions. Delivered research-based solutions enhancing human performance for government clients."),
    labeled("Federal Aviation Administration (FAA)", "Developed and maintained mission-critical web applications for air traffic management and aviation safety systems."),
    labeled("Centers for Medicare & Medicaid Services (CMS)", "Built healthcare applications managing Medicare, Medicaid, and CHIP programs. Implemented HIPAA-compliant solutions with stringent security requirements."),
    labeled("USPS Office of Inspector General", "Delivered oversight and audit systems ensuring efficiency, accountability, and integrity of postal operations."),
    labeled("State of South Carolina", "Developed state government portals and services supporting education, public safety, transportation, and healthcare initiatives."),
    labeled("ICF Next", "Global marketing and communications agency. Delivered digital transformation projects and customer engagement platforms."),
    labeled("MITRE Corporation", "Built systems for federally funded research and development centers supporting national security, cybersecurity, and aviation."),
    labeled("U.S. House of Representatives", "Developed legislative systems and internal applications for congressional operations and public transparency."),
    labeled("IBM", "Enterprise technology solutions involving cloud computing, AI integration, and legacy system modernization."),
    labeled("Northrop Grumman Corporation", "Aerospace and defense technology applications. Delivered secure, mission-critical systems for military operations."),
    labeled("The InterAgency Board", "Emergency preparedness and response systems. Developed platforms for equipment standardization and interoperability across agencies."),
    labeled("U.S. Department of Energy (DOE)", "Built energy policy and nuclear infrastructure management systems. Implemented clean energy technology platforms."),
    labeled("Communications Training Analysis Corp (CTAC)", "Technology solutions provider for government digital transformation. Delivered cloud-native, scalable IT services."),
    labeled("Chenega Government Consulting, LLC", "Alaska Native Corporation subsidiary. Developed IT solutions for federal civilian agencies."),
    labeled("Energy Enterprise Solutions, LLC", "Systems integrator for federal government. Delivered IT infrastructure, cybersecurity, and systems engineering solutions."),
    labeled("Booz Allen Hamilton", "Leading consulting firm. Developed management and technology solutions for defense, intelligence, and civil sectors."),
];

const ADDITIONAL_AREAS: &[ContentItem] = &[
    labeled("Bash/Shell Scripting", "Advanced automation for CI/CD, deployment orchestration, system administration, and data processing. Created hundreds of production scripts."),
    labeled("Docker & Containerization", "Expert with Lando/Docksal for local development. Orchestrated production containers with Kubernetes, Docker Swarm, and AWS ECS."),
    labeled("Database Administration", "MySQL/PostgreSQL management including replication, backup strategies, query optimization, and high-availability configurations."),
    labeled("Networking & Load Balancing", "Configured HAProxy, Nginx load balancers, VPNs (OpenVPN, WireGuard), and managed DNS for high-availability setups."),
    labeled("Monitoring & Alerting", "Deployed Prometheus, Grafana, Nagios, Zabbix, and ELK Stack. Built real-time dashboards and integrated PagerDuty/Slack alerting."),
    labeled("Frontend Frameworks", "Angular (2-16+), React, jQuery. Built SPAs, headless CMS frontends, and progressive web applications with advanced state management."),
];

const METHODOLOGIES: &[ContentItem] = &[
    ContentItem::Line("Agile/Scrum Development | DevOps/GitOps Practices | Infrastructure as Code (IaC)"),
    ContentItem::Line("WCAG 2.1 AA/AAA Accessibility Compliance | Section 508 Standards | 21st Century IDEA Act"),
    ContentItem::Line("GDPR, HIPAA, PCI DSS Compliance | CIS Benchmarks | NIST Cybersecurity Framework"),
    ContentItem::Line("API-First Architecture | Microservices | RESTful Design Principles | Headless CMS"),
    ContentItem::Line("Test-Driven Development (TDD) | Behavior-Driven Development (BDD) | Continuous Testing"),
];

const HIGHLIGHTS: &[ContentItem] = &[
    ContentItem::Line("Led Drupal 6/7/8 to Drupal 9/10 migration projects preserving data integrity across 50+ sites"),
    ContentItem::Line("Architected API-first Drupal applications consumed by Angular, React, and mobile applications"),
    ContentItem::Line("Implemented enterprise SSO solutions integrating SimpleSAMLphp with Shibboleth, SAML2, and ADFS"),
    ContentItem::Line("Built RAG-powered AI assistants enabling natural language queries of internal documentation and knowledge bases"),
    ContentItem::Line("Configured comprehensive security hardening including fail2ban, iptables, SELinux, and intrusion detection systems"),
    ContentItem::Line("Automated database backup routines with encryption achieving compliance with federal data protection standards"),
    ContentItem::Line("Developed custom Drupal modules for workflow automation, API endpoints, and third-party integrations (Salesforce, Azure)"),
    ContentItem::Line("Conducted load testing validating system capacity to handle 10x peak traffic during high-profile campaigns"),
];

/// The resume sections in page order.
pub fn sections() -> Vec<Section> {
    vec![
        Section {
            heading: "PROFESSIONAL SUMMARY",
            role: StyleRole::Body,
            marker: BulletMarker::None,
            items: vec![ContentItem::Line(SUMMARY)],
            gap_after: SECTION_GAP,
        },
        Section::bullets(
            "CORE TECHNICAL COMPETENCIES",
            BulletMarker::Plain,
            COMPETENCIES.to_vec(),
        ),
        Section::bullets(
            "KEY TECHNICAL EXPERTISE",
            BulletMarker::Bold,
            EXPERTISE.to_vec(),
        )
        .with_gap(WIDE_SECTION_GAP),
        Section::bullets(
            "CLIENT PORTFOLIO & EXPERIENCE",
            BulletMarker::None,
            PORTFOLIO.to_vec(),
        ),
        Section::bullets(
            "ADDITIONAL TECHNICAL AREAS",
            BulletMarker::Bold,
            ADDITIONAL_AREAS.to_vec(),
        ),
        Section::bullets(
            "METHODOLOGIES & STANDARDS",
            BulletMarker::Plain,
            METHODOLOGIES.to_vec(),
        ),
        Section::bullets(
            "PROFESSIONAL HIGHLIGHTS",
            BulletMarker::Plain,
            HIGHLIGHTS.to_vec(),
        )
        .with_gap(WIDE_SECTION_GAP),
    ]
}
