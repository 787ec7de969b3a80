//! Static page content. Declared once, immutable for the life of the
//! process; the interaction engine only ever reads it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV: [NavEntry; 8] = [
    NavEntry { id: "home", label: "Home" },
    NavEntry { id: "solutions", label: "Solutions" },
    NavEntry { id: "platform", label: "Platform" },
    NavEntry { id: "case-studies", label: "Case Studies" },
    NavEntry { id: "research", label: "Research" },
    NavEntry { id: "resources", label: "Resources" },
    NavEntry { id: "about", label: "About" },
    NavEntry { id: "contact", label: "Contact" },
];

/// Section ids observed by the site-wide tracker, in page order. Kept in
/// lockstep with [`NAV`]; a test below enforces the parity.
pub const SECTION_IDS: [&str; 8] = [
    "home",
    "solutions",
    "platform",
    "case-studies",
    "research",
    "resources",
    "about",
    "contact",
];

pub struct Hero {
    pub eyebrow: &'static str,
    pub title_a: &'static str,
    pub title_b: &'static str,
    pub subtitle: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

pub const HERO: Hero = Hero {
    eyebrow: "Applied Vision AI · Bengaluru",
    title_a: "Manufacturing-grade",
    title_b: "Vision AI",
    subtitle: "We are a research-first team building machine vision systems through pilots, measurements, and scalable engineering — not hype. We study real factory constraints (lighting, dust, vibration, changeovers) and ship only what survives them.",
    cta_primary: "Explore solutions",
    cta_secondary: "View case studies",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue {
    pub k: &'static str,
    pub v: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualLine {
    pub k: &'static str,
    pub v: &'static str,
    pub hint: Option<&'static str>,
}

pub struct FlowStep {
    pub id: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub promise: &'static str,
    pub bullets: &'static [&'static str],
    pub kpis: &'static [KeyValue],
    pub visual_title: &'static str,
    pub visual_lines: &'static [VisualLine],
}

/// Ids of the four solution-flow steps, observed by the step tracker.
pub const STEP_IDS: [&str; 4] = ["step-1", "step-2", "step-3", "step-4"];

pub const FLOW: [FlowStep; 4] = [
    FlowStep {
        id: "step-1",
        badge: "01",
        title: "Capture & Calibration",
        promise: "Reliable data begins with repeatable optics, lighting, and calibration.",
        bullets: &[
            "Lighting recipes + camera placement guidance",
            "Capture SOP (angle, distance, exposure, diffusion)",
            "Calibration and periodic validation checks",
        ],
        kpis: &[
            KeyValue { k: "Repeatability", v: "SOP-driven" },
            KeyValue { k: "Data quality", v: "Audited" },
            KeyValue { k: "Variance", v: "Reduced" },
        ],
        visual_title: "Capture checklist",
        visual_lines: &[
            VisualLine { k: "Lighting", v: "diffused / ring / backlight", hint: Some("depends on surface") },
            VisualLine { k: "Exposure", v: "locked + validated", hint: None },
            VisualLine { k: "Metadata", v: "shift / SKU / batch / time", hint: None },
        ],
    },
    FlowStep {
        id: "step-2",
        badge: "02",
        title: "Modeling & Benchmarking",
        promise: "Accuracy means nothing without latency and failure-mode reporting.",
        bullets: &[
            "Benchmark accuracy by defect type (confusion + examples)",
            "Latency profiling stage-by-stage (capture→decision)",
            "False reject vs missed defect trade-off reporting",
        ],
        kpis: &[
            KeyValue { k: "mAP/F1", v: "Per defect" },
            KeyValue { k: "Latency", v: "Budgeted" },
            KeyValue { k: "Failure modes", v: "Logged" },
        ],
        visual_title: "Latency budget (example)",
        visual_lines: &[
            VisualLine { k: "Capture", v: "6 ms", hint: None },
            VisualLine { k: "Preprocess", v: "8 ms", hint: None },
            VisualLine { k: "Inference", v: "22 ms", hint: Some("edge optimized") },
            VisualLine { k: "Postprocess", v: "10 ms", hint: None },
            VisualLine { k: "Decision/IO", v: "7 ms", hint: None },
        ],
    },
    FlowStep {
        id: "step-3",
        badge: "03",
        title: "Pilot on Real Line",
        promise: "We validate on your production constraints before scaling.",
        bullets: &[
            "Pilot plan with measurable KPIs and acceptance criteria",
            "Operator review workflow and evidence capture",
            "A/B tests for lighting, thresholds, and model versions",
        ],
        kpis: &[
            KeyValue { k: "ROI", v: "Validated" },
            KeyValue { k: "Uptime impact", v: "Measured" },
            KeyValue { k: "Operator time", v: "Reduced" },
        ],
        visual_title: "Pilot KPIs",
        visual_lines: &[
            VisualLine { k: "False rejects", v: "tracked", hint: None },
            VisualLine { k: "Missed defects", v: "tracked", hint: None },
            VisualLine { k: "Review time", v: "measured", hint: None },
            VisualLine { k: "Drift", v: "logged", hint: None },
        ],
    },
    FlowStep {
        id: "step-4",
        badge: "04",
        title: "Deploy & Monitor",
        promise: "Production is a living system — monitoring keeps it honest.",
        bullets: &[
            "Edge deployment profiles (Jetson/IPC) + fallback logic",
            "Drift monitoring + feedback loop for re-training",
            "Audit-ready traceability (images + metadata + decisions)",
        ],
        kpis: &[
            KeyValue { k: "Edge-ready", v: "Yes" },
            KeyValue { k: "Monitoring", v: "Always-on" },
            KeyValue { k: "Traceability", v: "Exportable" },
        ],
        visual_title: "Production signals",
        visual_lines: &[
            VisualLine { k: "Drift score", v: "alert thresholds", hint: None },
            VisualLine { k: "Throughput", v: "FPS / line speed", hint: None },
            VisualLine { k: "Quality trend", v: "SPC-style charts", hint: None },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryEntry {
    pub label: &'static str,
    pub caption: &'static str,
}

pub struct CaseStudy {
    pub id: &'static str,
    pub industry: &'static str,
    pub title: &'static str,
    pub status: &'static str,
    pub summary: &'static str,
    pub outcomes: &'static [KeyValue],
    pub results: &'static [&'static str],
    pub gallery: &'static [GalleryEntry],
}

pub const CASES: [CaseStudy; 3] = [
    CaseStudy {
        id: "case-1",
        industry: "Food & Agri Processing",
        title: "Inline grading pilot (quality consistency study)",
        status: "Pilot completed · scaling evaluation",
        summary: "Measured impact of vision-assisted grading on consistency, rework, and operator time. Built a repeatable capture SOP and evidence workflow.",
        outcomes: &[
            KeyValue { k: "KPI design", v: "Defined" },
            KeyValue { k: "Repeatability", v: "Improved" },
            KeyValue { k: "Operator review", v: "Streamlined" },
            KeyValue { k: "Traceability", v: "Enabled" },
        ],
        results: &[
            "Accuracy reported by defect category with borderline examples",
            "Latency profiled capture→decision and optimized on edge profile",
            "False rejects vs misses analyzed with recommended thresholds",
        ],
        gallery: &[
            GalleryEntry { label: "Inference overlay", caption: "Placeholder: annotated detections/segments on line frames." },
            GalleryEntry { label: "Defect samples", caption: "Placeholder: grid of defect crops + class labels." },
            GalleryEntry { label: "Dashboard snapshot", caption: "Placeholder: trends, drift, alerts, and batch summaries." },
        ],
    },
    CaseStudy {
        id: "case-2",
        industry: "Automotive Components",
        title: "Surface defect study (lighting + robustness)",
        status: "Study ongoing · dataset expansion",
        summary: "Controlled study comparing manual inspection vs AI under different lighting angles and line speeds. Focused on robustness and failure modes.",
        outcomes: &[
            KeyValue { k: "Lighting recipes", v: "Tested" },
            KeyValue { k: "Failure modes", v: "Cataloged" },
            KeyValue { k: "Edge profile", v: "Validated" },
            KeyValue { k: "SOP", v: "Drafted" },
        ],
        results: &[
            "Trade-offs documented: lighting vs recall vs false alarms",
            "Hard cases collected: glare, texture, oil stains, micro-scratches",
            "Recommendation: illumination + camera placement + confidence policy",
        ],
        gallery: &[
            GalleryEntry { label: "Before/after lighting", caption: "Placeholder: show how illumination changes defect visibility." },
            GalleryEntry { label: "Confusion examples", caption: "Placeholder: borderline and misclassified cases." },
            GalleryEntry { label: "Line-speed test", caption: "Placeholder: FPS and latency breakdown under speed changes." },
        ],
    },
    CaseStudy {
        id: "case-3",
        industry: "Pharma Packaging",
        title: "Packaging verification POC (audit-ready evidence)",
        status: "POC completed · next phase scoped",
        summary: "Validated presence/position/print checks with traceability for QA review. Focus: evidence capture and explainable rejection reasons.",
        outcomes: &[
            KeyValue { k: "Traceability", v: "Audit-ready" },
            KeyValue { k: "Review workflow", v: "Designed" },
            KeyValue { k: "Integration", v: "Scoped" },
            KeyValue { k: "FP analysis", v: "Completed" },
        ],
        results: &[
            "Evidence capture pipeline designed (images + metadata + decisions)",
            "False positives analyzed by artifact type and lighting conditions",
            "Integration plan drafted for existing QA workflow",
        ],
        gallery: &[
            GalleryEntry { label: "Label/print checks", caption: "Placeholder: OCR/verification examples and mismatch highlighting." },
            GalleryEntry { label: "Batch report", caption: "Placeholder: exportable report view with samples." },
            GalleryEntry { label: "Reject reason UI", caption: "Placeholder: explainable reason cards for QA reviewers." },
        ],
    },
];

pub struct PlatformGroup {
    pub group: &'static str,
    pub items: &'static [&'static str],
}

pub const PLATFORM: [PlatformGroup; 5] = [
    PlatformGroup { group: "Edge", items: &["Jetson / Industrial IPC", "Low-latency inference", "Camera SDK integrations"] },
    PlatformGroup { group: "Model", items: &["ONNX / TensorRT", "Segmentation + detection", "Calibration + evaluation"] },
    PlatformGroup { group: "Data", items: &["Traceability store", "Batch metadata", "Exportable reports"] },
    PlatformGroup { group: "Monitoring", items: &["Drift logs", "Threshold policies", "Alerting hooks"] },
    PlatformGroup { group: "Integration", items: &["PLC/MES hooks", "Kafka/MQTT events", "Role-based access"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_and_section_ids_stay_in_lockstep() {
        assert_eq!(NAV.len(), SECTION_IDS.len());
        for (entry, id) in NAV.iter().zip(SECTION_IDS) {
            assert_eq!(entry.id, id);
        }
    }

    #[test]
    fn step_ids_match_the_flow_declaration() {
        assert_eq!(FLOW.len(), STEP_IDS.len());
        for (step, id) in FLOW.iter().zip(STEP_IDS) {
            assert_eq!(step.id, id);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in SECTION_IDS.iter().enumerate() {
            for b in &SECTION_IDS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_case_has_tab_content() {
        for case in &CASES {
            assert!(!case.outcomes.is_empty());
            assert!(!case.results.is_empty());
            assert!(!case.gallery.is_empty());
        }
    }
}
