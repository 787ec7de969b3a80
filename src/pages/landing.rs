//! The single marketing page. Owns the overlay state and wires the
//! viewport trackers into the header, progress bar, and step flow.

use yew::prelude::*;

use crate::components::case_modal::CaseModal;
use crate::components::nav_bar::NavBar;
use crate::components::progress_bar::ProgressBar;
use crate::components::step_flow::StepFlow;
use crate::content::{CASES, HERO, PLATFORM, SECTION_IDS};
use crate::engine::overlay::OverlayState;
use crate::hooks::{
    scroll_to_section, use_active_section, use_reduced_motion, use_scroll_progress,
};

/// Site-wide tracker thresholds. Coarser than the step tracker: top-level
/// sections are tall, so mid-range ratios are enough to rank them.
const NAV_THRESHOLDS: [f64; 3] = [0.15, 0.35, 0.5];

#[function_component(Landing)]
pub fn landing() -> Html {
    let overlay = use_state_eq(OverlayState::default);
    let reduced_motion = use_reduced_motion();
    let progress = use_scroll_progress();
    let active_section = use_active_section(&SECTION_IDS, &NAV_THRESHOLDS, "0px");

    let on_switch_tab = {
        let overlay = overlay.clone();
        Callback::from(move |tab| overlay.set((*overlay).switch_tab(tab)))
    };
    let on_dismiss = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set((*overlay).dismiss()))
    };

    // Hero drifts upward over the first quarter of the page, unless the
    // user prefers reduced motion.
    let hero_style = if reduced_motion {
        String::new()
    } else {
        let drift = -70.0 * (progress / 0.25).min(1.0);
        format!("transform: translateY({drift:.1}px);")
    };

    let cta_solutions = Callback::from(move |_: MouseEvent| {
        scroll_to_section("solutions", reduced_motion);
    });
    let cta_cases = Callback::from(move |_: MouseEvent| {
        scroll_to_section("case-studies", reduced_motion);
    });

    html! {
        <div class="page">
            <ProgressBar {progress} />
            <NavBar active_id={active_section} {reduced_motion} />

            <main>
                <section id="home" class="section hero-section">
                    <div class="section-inner hero-grid" style={hero_style}>
                        <div class="hero-copy">
                            <div class="hero-eyebrow">{HERO.eyebrow}</div>
                            <h1 class="hero-title">
                                {HERO.title_a}
                                <span class="hero-title-accent">{HERO.title_b}</span>
                            </h1>
                            <p class="hero-subtitle">{HERO.subtitle}</p>
                            <div class="hero-ctas">
                                <button class="cta-primary" onclick={cta_solutions}>{HERO.cta_primary}</button>
                                <button class="cta-secondary" onclick={cta_cases}>{HERO.cta_secondary}</button>
                            </div>
                            <div class="hero-metrics">
                                <div class="hero-metric">
                                    <div class="hero-metric-title">{"Pilot-first"}</div>
                                    <div class="hero-metric-sub">{"KPIs before contracts"}</div>
                                </div>
                                <div class="hero-metric">
                                    <div class="hero-metric-title">{"Edge-ready"}</div>
                                    <div class="hero-metric-sub">{"Jetson / IPC profiles"}</div>
                                </div>
                                <div class="hero-metric">
                                    <div class="hero-metric-title">{"Evidence-based"}</div>
                                    <div class="hero-metric-sub">{"Audit-ready traceability"}</div>
                                </div>
                                <div class="hero-metric">
                                    <div class="hero-metric-title">{"Operator adoption"}</div>
                                    <div class="hero-metric-sub">{"Review workflows built in"}</div>
                                </div>
                            </div>
                        </div>
                        <div class="hero-console">
                            <div class="hero-console-head">
                                <span class="hero-console-dot"></span>
                                <span class="hero-console-dot"></span>
                                <span class="hero-console-dot"></span>
                                <span class="hero-console-name">{"line-monitor · cam-03"}</span>
                            </div>
                            <div class="hero-console-body">
                                <div class="hero-console-line"><span class="key">{"stream"}</span><span class="val">{"1920×1080 @ 42 fps"}</span></div>
                                <div class="hero-console-line"><span class="key">{"model"}</span><span class="val">{"seg-v4 · TensorRT"}</span></div>
                                <div class="hero-console-line"><span class="key">{"latency"}</span><span class="val">{"53 ms capture→decision"}</span></div>
                                <div class="hero-console-line"><span class="key">{"drift"}</span><span class="val ok">{"nominal"}</span></div>
                                <div class="hero-console-line"><span class="key">{"rejects"}</span><span class="val">{"3 / 10k units"}</span></div>
                                <div class="hero-console-line"><span class="key">{"evidence"}</span><span class="val">{"images + metadata stored"}</span></div>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="solutions" class="section">
                    <div class="section-inner">
                        <div class="section-head">
                            <div class="section-eyebrow">{"How we work"}</div>
                            <h2 class="section-title">{"From capture to production, measured at every step"}</h2>
                            <p class="section-sub">{"No black boxes. Every phase produces numbers you can audit and decisions you can trace."}</p>
                        </div>
                        <StepFlow {reduced_motion} />
                    </div>
                </section>

                <section id="platform" class="section">
                    <div class="section-inner">
                        <div class="section-head">
                            <div class="section-eyebrow">{"Platform"}</div>
                            <h2 class="section-title">{"One stack from camera to MES"}</h2>
                        </div>
                        <div class="platform-grid">
                            { for PLATFORM.iter().map(|group| html! {
                                <div class="platform-card">
                                    <div class="platform-group">{group.group}</div>
                                    <ul class="platform-items">
                                        { for group.items.iter().map(|item| html! {
                                            <li>{*item}</li>
                                        })}
                                    </ul>
                                </div>
                            })}
                        </div>
                    </div>
                </section>

                <section id="case-studies" class="section">
                    <div class="section-inner">
                        <div class="section-head">
                            <div class="section-eyebrow">{"Case studies"}</div>
                            <h2 class="section-title">{"Pilots, studies, and POCs with honest numbers"}</h2>
                        </div>
                        <div class="case-grid">
                            { for CASES.iter().enumerate().map(|(index, case)| {
                                let overlay = overlay.clone();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    overlay.set((*overlay).select(index));
                                });
                                html! {
                                    <button class="case-card" {onclick}>
                                        <div class="case-industry">{case.industry}</div>
                                        <h3 class="case-title">{case.title}</h3>
                                        <p class="case-summary">{case.summary}</p>
                                        <div class="case-foot">
                                            <span class="case-status">{case.status}</span>
                                            <span class="case-open">{"View details"}</span>
                                        </div>
                                    </button>
                                }
                            })}
                        </div>
                    </div>
                </section>

                <section id="research" class="section">
                    <div class="section-inner">
                        <div class="section-head">
                            <div class="section-eyebrow">{"Research"}</div>
                            <h2 class="section-title">{"We publish what we measure"}</h2>
                        </div>
                        <div class="card-grid three">
                            <div class="info-card">
                                <h3>{"Lighting robustness under line speed"}</h3>
                                <p>{"How illumination geometry interacts with exposure budgets as conveyor speed rises, and where recall degrades first."}</p>
                            </div>
                            <div class="info-card">
                                <h3>{"Drift detection for visual QA"}</h3>
                                <p>{"Practical drift scores for inspection streams: what to alert on, what to log, and what to send back for labeling."}</p>
                            </div>
                            <div class="info-card">
                                <h3>{"Edge latency budgets"}</h3>
                                <p>{"Stage-by-stage latency accounting on Jetson-class hardware, with the trade-offs that matter at decision time."}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="resources" class="section">
                    <div class="section-inner">
                        <div class="section-head">
                            <div class="section-eyebrow">{"Resources"}</div>
                            <h2 class="section-title">{"Guides for teams evaluating vision AI"}</h2>
                        </div>
                        <div class="card-grid four">
                            <div class="info-card">
                                <h3>{"Capture SOP template"}</h3>
                                <p>{"A checklist for repeatable imaging: optics, lighting, exposure, and metadata."}</p>
                            </div>
                            <div class="info-card">
                                <h3>{"Pilot KPI worksheet"}</h3>
                                <p>{"Define acceptance criteria before the pilot starts, not after."}</p>
                            </div>
                            <div class="info-card">
                                <h3>{"Latency budget primer"}</h3>
                                <p>{"How to split a capture→decision budget across stages."}</p>
                            </div>
                            <div class="info-card">
                                <h3>{"Evidence & traceability guide"}</h3>
                                <p>{"What to store per decision to survive a QA audit."}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="about" class="section">
                    <div class="section-inner">
                        <div class="section-head">
                            <div class="section-eyebrow">{"About"}</div>
                            <h2 class="section-title">{"A research-first team in Bengaluru"}</h2>
                        </div>
                        <div class="card-grid three">
                            <div class="info-card">
                                <h3>{"Measure, then ship"}</h3>
                                <p>{"Every claim is backed by a number from your line, not a demo reel."}</p>
                            </div>
                            <div class="info-card">
                                <h3>{"Factory constraints first"}</h3>
                                <p>{"Dust, glare, vibration, and changeovers are design inputs, not surprises."}</p>
                            </div>
                            <div class="info-card">
                                <h3>{"Operators in the loop"}</h3>
                                <p>{"Systems that operators trust get used; we design the review workflow with them."}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="contact" class="section contact-section">
                    <div class="section-inner">
                        <div class="section-head">
                            <div class="section-eyebrow">{"Contact"}</div>
                            <h2 class="section-title">{"Discuss a pilot"}</h2>
                            <p class="section-sub">{"Tell us about your line and what you want measured. We reply with a scoped pilot plan."}</p>
                        </div>
                        <div class="contact-grid">
                            <div class="contact-form">
                                <div class="form-row">
                                    <input class="form-field" type="text" placeholder="Name" />
                                    <input class="form-field" type="email" placeholder="Work email" />
                                </div>
                                <div class="form-row">
                                    <input class="form-field" type="text" placeholder="Company" />
                                    <select class="form-field">
                                        <option>{"Food & Agri Processing"}</option>
                                        <option>{"Automotive Components"}</option>
                                        <option>{"Pharma Packaging"}</option>
                                        <option>{"Other manufacturing"}</option>
                                    </select>
                                </div>
                                <textarea class="form-field form-textarea" placeholder="What should the pilot measure?"></textarea>
                                <button type="button" class="cta-primary">{"Request a pilot plan"}</button>
                            </div>
                            <div class="contact-aside">
                                <div class="contact-line">{"hello@eyeforgood.ai"}</div>
                                <div class="contact-line">{"Bengaluru, India"}</div>
                                <div class="contact-line muted">{"We typically respond within two business days."}</div>
                            </div>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="section-inner footer-inner">
                    <div>{"EFG · Eye For Good"}</div>
                    <div class="muted">{"© 2025 · Applied Vision AI · Bengaluru"}</div>
                </div>
            </footer>

            if let OverlayState::Open { case, tab } = *overlay {
                <CaseModal case_index={case} {tab} on_switch_tab={on_switch_tab} on_dismiss={on_dismiss} />
            }

            <style>
                {r#"
                * { margin: 0; padding: 0; box-sizing: border-box; }

                body {
                    background: #040812;
                    color: #e8edf6;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                    line-height: 1.6;
                    -webkit-font-smoothing: antialiased;
                }

                button { font-family: inherit; cursor: pointer; }

                .page { position: relative; }

                .muted { color: #8b94a7; }

                /* Scroll progress */
                .scroll-progress {
                    position: fixed;
                    top: 0; left: 0; right: 0;
                    height: 3px;
                    background: rgba(255, 255, 255, 0.06);
                    z-index: 1200;
                }
                .scroll-progress-fill {
                    height: 100%;
                    background: linear-gradient(90deg, #ffd84d, #ffb347);
                }

                /* Header */
                .site-header {
                    position: fixed;
                    top: 3px; left: 0; right: 0;
                    background: rgba(4, 8, 18, 0.88);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    z-index: 1100;
                }
                .site-header-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.8rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .brand { display: flex; align-items: center; gap: 0.8rem; }
                .brand-mark {
                    width: 42px; height: 42px;
                    display: grid; place-items: center;
                    border-radius: 10px;
                    background: linear-gradient(135deg, #ffd84d, #ffb347);
                    color: #10131c;
                    font-weight: 800;
                    font-size: 0.9rem;
                }
                .brand-title { font-weight: 700; font-size: 0.95rem; display: flex; align-items: center; gap: 0.5rem; }
                .brand-badge {
                    font-size: 0.62rem;
                    font-weight: 600;
                    padding: 0.15rem 0.45rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 216, 77, 0.4);
                    color: #ffd84d;
                    white-space: nowrap;
                }
                .brand-sub { font-size: 0.72rem; color: #8b94a7; }

                .site-nav { display: flex; gap: 0.2rem; }
                .nav-entry {
                    background: none;
                    border: none;
                    color: #aab3c5;
                    font-size: 0.82rem;
                    padding: 0.45rem 0.7rem;
                    border-radius: 8px;
                    transition: color 0.2s, background 0.2s;
                }
                .nav-entry:hover { color: #e8edf6; }
                .nav-entry.active {
                    color: #ffd84d;
                    background: rgba(255, 216, 77, 0.08);
                }

                .header-actions { display: flex; align-items: center; gap: 0.6rem; }
                .header-cta {
                    background: linear-gradient(135deg, #ffd84d, #ffb347);
                    color: #10131c;
                    border: none;
                    font-weight: 700;
                    font-size: 0.8rem;
                    padding: 0.55rem 1rem;
                    border-radius: 10px;
                }
                .mobile-menu-toggle {
                    display: none;
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    color: #e8edf6;
                    font-size: 0.8rem;
                    padding: 0.5rem 0.9rem;
                    border-radius: 10px;
                }
                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    padding: 0.6rem 1.5rem 1rem;
                }
                .mobile-menu-entry {
                    background: none;
                    border: none;
                    color: #aab3c5;
                    text-align: left;
                    font-size: 0.95rem;
                    padding: 0.6rem 0;
                }

                /* Sections */
                .section { padding: 6rem 0 4rem; }
                .section-inner { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
                .section-head { max-width: 640px; margin-bottom: 2.5rem; }
                .section-eyebrow {
                    color: #ffd84d;
                    font-size: 0.78rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    margin-bottom: 0.6rem;
                }
                .section-title { font-size: 2rem; line-height: 1.25; margin-bottom: 0.8rem; }
                .section-sub { color: #aab3c5; }

                /* Hero */
                .hero-section { padding-top: 9rem; min-height: 92vh; }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1.15fr 0.85fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-eyebrow {
                    display: inline-block;
                    color: #ffd84d;
                    font-size: 0.78rem;
                    font-weight: 700;
                    border: 1px solid rgba(255, 216, 77, 0.35);
                    border-radius: 999px;
                    padding: 0.3rem 0.8rem;
                    margin-bottom: 1.2rem;
                }
                .hero-title { font-size: 3.1rem; line-height: 1.1; }
                .hero-title-accent {
                    display: block;
                    background: linear-gradient(90deg, #ffd84d, #ffb347);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle { color: #aab3c5; margin: 1.2rem 0 1.8rem; max-width: 540px; }
                .hero-ctas { display: flex; gap: 0.8rem; margin-bottom: 2.2rem; }
                .cta-primary {
                    background: linear-gradient(135deg, #ffd84d, #ffb347);
                    color: #10131c;
                    border: none;
                    font-weight: 700;
                    font-size: 0.92rem;
                    padding: 0.85rem 1.5rem;
                    border-radius: 12px;
                }
                .cta-secondary {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.18);
                    color: #e8edf6;
                    font-weight: 600;
                    font-size: 0.92rem;
                    padding: 0.85rem 1.5rem;
                    border-radius: 12px;
                }
                .hero-metrics {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 0.8rem;
                }
                .hero-metric {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 0.8rem;
                    background: rgba(255, 255, 255, 0.02);
                }
                .hero-metric-title { font-weight: 700; font-size: 0.85rem; }
                .hero-metric-sub { font-size: 0.72rem; color: #8b94a7; }

                .hero-console {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    background: #0a101e;
                    overflow: hidden;
                    box-shadow: 0 30px 80px rgba(0, 0, 0, 0.45);
                }
                .hero-console-head {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 0.7rem 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.07);
                }
                .hero-console-dot {
                    width: 10px; height: 10px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.15);
                }
                .hero-console-name {
                    margin-left: 0.5rem;
                    font-size: 0.75rem;
                    color: #8b94a7;
                    font-family: 'SF Mono', 'Fira Code', monospace;
                }
                .hero-console-body { padding: 1rem; }
                .hero-console-line {
                    display: flex;
                    justify-content: space-between;
                    font-family: 'SF Mono', 'Fira Code', monospace;
                    font-size: 0.78rem;
                    padding: 0.45rem 0;
                    border-bottom: 1px dashed rgba(255, 255, 255, 0.05);
                }
                .hero-console-line .key { color: #8b94a7; }
                .hero-console-line .val { color: #e8edf6; }
                .hero-console-line .val.ok { color: #6ee7a0; }

                /* Step flow */
                .step-flow {
                    display: grid;
                    grid-template-columns: 280px 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .step-rail {
                    position: sticky;
                    top: 110px;
                }
                .step-rail-counter {
                    font-family: 'SF Mono', 'Fira Code', monospace;
                    font-size: 1.6rem;
                    color: #ffd84d;
                    margin-bottom: 1rem;
                }
                .step-rail-entries { display: flex; flex-direction: column; gap: 0.4rem; }
                .step-rail-entry {
                    display: grid;
                    grid-template-columns: auto 1fr;
                    grid-template-rows: auto auto;
                    column-gap: 0.6rem;
                    align-items: center;
                    text-align: left;
                    background: none;
                    border: 1px solid transparent;
                    border-radius: 10px;
                    padding: 0.6rem 0.8rem;
                    color: #aab3c5;
                    transition: border-color 0.2s, color 0.2s;
                }
                .step-rail-entry.active {
                    color: #e8edf6;
                    border-color: rgba(255, 216, 77, 0.35);
                    background: rgba(255, 216, 77, 0.05);
                }
                .step-rail-badge {
                    font-family: 'SF Mono', 'Fira Code', monospace;
                    font-size: 0.75rem;
                    color: #ffd84d;
                }
                .step-rail-title { font-size: 0.85rem; font-weight: 600; }
                .step-rail-meter {
                    grid-column: 1 / -1;
                    height: 2px;
                    margin-top: 0.45rem;
                    background: rgba(255, 255, 255, 0.07);
                    border-radius: 999px;
                    overflow: hidden;
                }
                .step-rail-meter-fill {
                    display: block;
                    height: 100%;
                    background: #ffd84d;
                    transition: width 0.35s ease;
                }

                .step-blocks { display: flex; flex-direction: column; gap: 2rem; }
                .step-block-anchor { scroll-margin-top: 110px; }
                .step-block {
                    display: grid;
                    grid-template-columns: 1.1fr 0.9fr;
                    gap: 1.6rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 18px;
                    padding: 1.8rem;
                    background: rgba(255, 255, 255, 0.02);
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .step-block.in-view { opacity: 1; transform: translateY(0); }
                @media (prefers-reduced-motion: reduce) {
                    .step-block { opacity: 1; transform: none; transition: none; }
                    .step-rail-meter-fill { transition: none; }
                }
                .step-badge {
                    font-family: 'SF Mono', 'Fira Code', monospace;
                    color: #ffd84d;
                    font-size: 0.8rem;
                    margin-bottom: 0.5rem;
                }
                .step-title { font-size: 1.3rem; margin-bottom: 0.4rem; }
                .step-promise { color: #aab3c5; font-size: 0.9rem; margin-bottom: 0.9rem; }
                .step-bullets { list-style: none; margin-bottom: 1rem; }
                .step-bullets li {
                    font-size: 0.86rem;
                    color: #c6cdda;
                    padding: 0.3rem 0 0.3rem 1.2rem;
                    position: relative;
                }
                .step-bullets li::before {
                    content: '→';
                    position: absolute;
                    left: 0;
                    color: #ffd84d;
                }
                .step-kpis { display: flex; gap: 0.6rem; flex-wrap: wrap; }
                .step-kpi {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 10px;
                    padding: 0.5rem 0.8rem;
                }
                .step-kpi-key { font-size: 0.66rem; color: #8b94a7; text-transform: uppercase; letter-spacing: 0.08em; }
                .step-kpi-value { font-size: 0.82rem; font-weight: 700; }

                .step-visual {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    background: #0a101e;
                    padding: 1.2rem;
                    align-self: start;
                }
                .step-visual-title {
                    font-size: 0.78rem;
                    font-weight: 700;
                    color: #ffd84d;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    margin-bottom: 0.8rem;
                }
                .step-visual-line {
                    display: flex;
                    align-items: baseline;
                    gap: 0.6rem;
                    font-size: 0.8rem;
                    padding: 0.4rem 0;
                    border-bottom: 1px dashed rgba(255, 255, 255, 0.06);
                }
                .step-visual-key { color: #8b94a7; min-width: 110px; }
                .step-visual-value { font-family: 'SF Mono', 'Fira Code', monospace; }
                .step-visual-hint { font-size: 0.7rem; color: #6b7387; font-style: italic; }

                /* Platform */
                .platform-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                }
                .platform-card {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    padding: 1.2rem;
                    background: rgba(255, 255, 255, 0.02);
                }
                .platform-group {
                    font-weight: 700;
                    font-size: 0.85rem;
                    color: #ffd84d;
                    margin-bottom: 0.7rem;
                }
                .platform-items { list-style: none; }
                .platform-items li {
                    font-size: 0.8rem;
                    color: #aab3c5;
                    padding: 0.25rem 0;
                }

                /* Case studies */
                .case-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.2rem;
                }
                .case-card {
                    text-align: left;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.02);
                    color: inherit;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                    transition: border-color 0.2s, transform 0.2s;
                }
                .case-card:hover {
                    border-color: rgba(255, 216, 77, 0.4);
                    transform: translateY(-3px);
                }
                .case-industry {
                    font-size: 0.72rem;
                    font-weight: 700;
                    color: #ffd84d;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .case-title { font-size: 1.05rem; line-height: 1.35; }
                .case-summary { font-size: 0.85rem; color: #aab3c5; flex: 1; }
                .case-foot {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.75rem;
                }
                .case-status { color: #8b94a7; }
                .case-open { color: #ffd84d; font-weight: 700; }

                /* Info cards */
                .card-grid { display: grid; gap: 1.2rem; }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .card-grid.four { grid-template-columns: repeat(4, 1fr); }
                .info-card {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    padding: 1.4rem;
                    background: rgba(255, 255, 255, 0.02);
                }
                .info-card h3 { font-size: 0.98rem; margin-bottom: 0.5rem; }
                .info-card p { font-size: 0.84rem; color: #aab3c5; }

                /* Contact */
                .contact-section { padding-bottom: 6rem; }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1.3fr 0.7fr;
                    gap: 2rem;
                }
                .contact-form { display: flex; flex-direction: column; gap: 0.8rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.8rem; }
                .form-field {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 10px;
                    padding: 0.8rem 1rem;
                    color: #e8edf6;
                    font-family: inherit;
                    font-size: 0.88rem;
                }
                .form-field:focus { outline: none; border-color: rgba(255, 216, 77, 0.5); }
                .form-textarea { min-height: 120px; resize: vertical; }
                .contact-aside {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    padding: 1.4rem;
                    background: rgba(255, 255, 255, 0.02);
                    align-self: start;
                }
                .contact-line { padding: 0.3rem 0; font-size: 0.9rem; }

                /* Footer */
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    padding: 1.6rem 0;
                }
                .footer-inner {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.82rem;
                }

                /* Modal */
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(2, 4, 10, 0.78);
                    backdrop-filter: blur(6px);
                    display: grid;
                    place-items: center;
                    padding: 1.5rem;
                    z-index: 1300;
                }
                .modal-panel {
                    width: min(860px, 100%);
                    max-height: 86vh;
                    overflow-y: auto;
                    background: #0a101e;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 18px;
                    padding: 1.8rem;
                }
                .modal-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1.2rem;
                }
                .modal-industry {
                    font-size: 0.72rem;
                    font-weight: 700;
                    color: #ffd84d;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    margin-bottom: 0.3rem;
                }
                .modal-title { font-size: 1.35rem; line-height: 1.3; margin-bottom: 0.3rem; }
                .modal-status { font-size: 0.78rem; color: #8b94a7; }
                .modal-close {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    color: #e8edf6;
                    font-size: 0.8rem;
                    padding: 0.5rem 1rem;
                    border-radius: 10px;
                    flex-shrink: 0;
                }
                .modal-tabs {
                    display: flex;
                    gap: 0.4rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    margin-bottom: 1.2rem;
                }
                .modal-tab {
                    background: none;
                    border: none;
                    color: #aab3c5;
                    font-size: 0.85rem;
                    font-weight: 600;
                    padding: 0.6rem 1rem;
                    border-bottom: 2px solid transparent;
                }
                .modal-tab.active { color: #ffd84d; border-bottom-color: #ffd84d; }
                .modal-summary { color: #c6cdda; margin-bottom: 1.2rem; }
                .modal-outcomes {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 0.7rem;
                    margin-bottom: 1.2rem;
                }
                .modal-outcome {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 10px;
                    padding: 0.7rem;
                }
                .modal-outcome-key { font-size: 0.66rem; color: #8b94a7; text-transform: uppercase; letter-spacing: 0.08em; }
                .modal-outcome-value { font-size: 0.88rem; font-weight: 700; }
                .modal-preview {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 1rem;
                }
                .modal-preview-title { font-size: 0.78rem; font-weight: 700; color: #ffd84d; margin-bottom: 0.7rem; }
                .modal-preview-frames { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.7rem; }
                .modal-preview-frame {
                    aspect-ratio: 4 / 3;
                    display: grid;
                    place-items: center;
                    border: 1px dashed rgba(255, 255, 255, 0.14);
                    border-radius: 10px;
                    font-size: 0.72rem;
                    color: #8b94a7;
                    text-align: center;
                    padding: 0.5rem;
                }
                .modal-results { list-style: none; margin-bottom: 1.2rem; }
                .modal-results li {
                    font-size: 0.88rem;
                    color: #c6cdda;
                    padding: 0.4rem 0 0.4rem 1.2rem;
                    position: relative;
                }
                .modal-results li::before {
                    content: '→';
                    position: absolute;
                    left: 0;
                    color: #ffd84d;
                }
                .modal-metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.7rem; }
                .modal-metric {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 10px;
                    padding: 0.9rem;
                    text-align: center;
                }
                .modal-metric-value {
                    font-family: 'SF Mono', 'Fira Code', monospace;
                    font-size: 1.2rem;
                    color: #ffd84d;
                }
                .modal-metric-key { font-size: 0.7rem; color: #8b94a7; }
                .modal-gallery { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.8rem; }
                .modal-gallery-entry {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 1rem;
                    min-height: 150px;
                }
                .modal-gallery-label { font-weight: 700; font-size: 0.85rem; margin-bottom: 0.4rem; }
                .modal-gallery-caption { font-size: 0.76rem; color: #8b94a7; }

                /* Responsive */
                @media (max-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr; }
                    .platform-grid { grid-template-columns: repeat(2, 1fr); }
                    .card-grid.four { grid-template-columns: repeat(2, 1fr); }
                    .step-flow { grid-template-columns: 1fr; }
                    .step-rail { position: static; }
                    .step-rail-entries { flex-direction: row; flex-wrap: wrap; }
                }
                @media (max-width: 768px) {
                    .site-nav { display: none; }
                    .header-cta { display: none; }
                    .mobile-menu-toggle { display: block; }
                    .mobile-menu { display: flex; }
                    .hero-title { font-size: 2.2rem; }
                    .hero-metrics { grid-template-columns: repeat(2, 1fr); }
                    .step-block { grid-template-columns: 1fr; }
                    .case-grid { grid-template-columns: 1fr; }
                    .card-grid.three { grid-template-columns: 1fr; }
                    .card-grid.four { grid-template-columns: 1fr; }
                    .contact-grid { grid-template-columns: 1fr; }
                    .form-row { grid-template-columns: 1fr; }
                    .platform-grid { grid-template-columns: 1fr; }
                    .modal-outcomes { grid-template-columns: repeat(2, 1fr); }
                    .modal-preview-frames { grid-template-columns: 1fr; }
                    .modal-metrics { grid-template-columns: 1fr; }
                    .modal-gallery { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
