use serde_json::json;
use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
    time::Duration,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, FormData, HtmlFormElement, KeyboardEvent, SubmitEvent};
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::{
    config::SiteConfig,
    dom::{self, ListenerGuard, ObserverGuard},
    logging::Logger,
    nav::{MobileMenuState, NavController},
    notify::{Notification, NotificationKind, NotificationQueue},
    observed::{parse_count, CounterAnimation, SkillWidth, VisibilityLatch},
    scroll::{self, HeaderTier, ScrollDecision},
    splash::LoadingPhase,
    typing::TypingAnimator,
};

const SCROLL_REVEAL_SELECTOR: &str = ".specialization-card, .skill-item, .timeline-item, .project-card";
const OBSERVED_REVEAL_SELECTOR: &str =
    ".specialization-card, .timeline-item, .project-card, .contact-item";
const COUNTER_SELECTOR: &str = ".stat-number[data-counter-id]";
const SKILL_SELECTOR: &str = ".skill-item[data-skill-id]";
const REVEAL_ID_ATTR: &str = "data-reveal-id";
const REVEAL_GROUP_STRIDE: usize = 100;
const CONTACT_SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

struct SectionLink {
    id: &'static str,
    label: &'static str,
}

const SECTIONS: [SectionLink; 6] = [
    SectionLink { id: "home", label: "Home" },
    SectionLink { id: "about", label: "About" },
    SectionLink { id: "skills", label: "Skills" },
    SectionLink { id: "experience", label: "Experience" },
    SectionLink { id: "projects", label: "Projects" },
    SectionLink { id: "contact", label: "Contact" },
];

// (data-count, suffix, label)
const STATS: [(&str, &str, &str); 4] = [
    ("15", "+", "Projects shipped"),
    ("3", "+", "Years building"),
    ("250", "", "Commits this year"),
    ("12", "", "Technologies"),
];

const SPECIALIZATIONS: [(&str, &str); 3] = [
    ("Frontend", "Responsive interfaces with careful attention to motion and accessibility."),
    ("Backend", "Services and APIs that stay boring under load."),
    ("Design", "Wireframes to polished UI, with a design system behind it."),
];

// (name, data-width)
const SKILLS: [(&str, &str); 5] = [
    ("Rust", "85%"),
    ("TypeScript", "90%"),
    ("Python", "80%"),
    ("SQL", "75%"),
    ("UI Design", "70%"),
];

// (period, role, organization, summary)
const TIMELINE: [(&str, &str, &str, &str); 3] = [
    ("2024 - Now", "Software Developer", "Northwind Labs", "Owns the customer dashboard and its release pipeline."),
    ("2022 - 2024", "Web Developer", "Studio Meridian", "Built marketing sites and a shared component library."),
    ("2021 - 2022", "Intern", "Campus IT", "Automated device provisioning for the help desk."),
];

// (title, summary, tags)
const PROJECTS: [(&str, &str, &[&str]); 3] = [
    ("Trailhead", "Offline-first hiking planner with route sharing.", &["Rust", "WASM", "IndexedDB"]),
    ("Ledgerly", "Small-business bookkeeping with bank sync.", &["TypeScript", "PostgreSQL"]),
    ("Palette", "Accessible color palette generator.", &["Design", "CSS"]),
];

// (label, value)
const CONTACT_ITEMS: [(&str, &str); 3] = [
    ("Email", "hello@example.dev"),
    ("Location", "Austin, TX"),
    ("Availability", "Open to freelance work"),
];

#[derive(Clone, Copy)]
enum RevealGroup {
    Specialization = 0,
    Skill = 1,
    Timeline = 2,
    Project = 3,
    Contact = 4,
}

fn reveal_id(group: RevealGroup, index: usize) -> usize {
    group as usize * REVEAL_GROUP_STRIDE + index
}

#[derive(Clone, PartialEq)]
struct PageState {
    header: HeaderTier,
    back_to_top_visible: bool,
    active_link: Option<usize>,
    menu: MobileMenuState,
    revealed: BTreeSet<usize>,
    typed: String,
    counters: BTreeMap<usize, u32>,
    skill_widths: BTreeMap<usize, String>,
    notifications: Vec<Notification>,
    loading: LoadingPhase,
}

impl PageState {
    fn initial(active_link: Option<usize>) -> Self {
        Self {
            header: HeaderTier::Base,
            back_to_top_visible: false,
            active_link,
            menu: MobileMenuState::Closed,
            revealed: BTreeSet::new(),
            typed: String::new(),
            counters: BTreeMap::new(),
            skill_widths: BTreeMap::new(),
            notifications: Vec::new(),
            loading: LoadingPhase::Visible,
        }
    }

    fn is_revealed(&self, group: RevealGroup, index: usize) -> bool {
        self.revealed.contains(&reveal_id(group, index))
    }
}

enum PageAction {
    Scrolled(ScrollDecision),
    Revealed(usize),
    ActiveLink(usize),
    Menu(MobileMenuState),
    Typed(String),
    Counter { id: usize, display: u32 },
    SkillWidth { id: usize, width: String },
    Notifications(Vec<Notification>),
    Loading(LoadingPhase),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PageAction::Scrolled(decision) => {
                next.header = decision.header;
                next.back_to_top_visible = decision.back_to_top_visible;
                next.revealed.extend(decision.reveal);
            }
            PageAction::Revealed(id) => {
                next.revealed.insert(id);
            }
            PageAction::ActiveLink(index) => next.active_link = Some(index),
            PageAction::Menu(menu) => next.menu = menu,
            PageAction::Typed(text) => next.typed = text,
            PageAction::Counter { id, display } => {
                next.counters.insert(id, display);
            }
            PageAction::SkillWidth { id, width } => {
                next.skill_widths.insert(id, width);
            }
            PageAction::Notifications(items) => next.notifications = items,
            PageAction::Loading(phase) => next.loading = phase,
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Everything a DOM callback needs to turn an event into page state.
#[derive(Clone)]
struct Runtime {
    config: Rc<SiteConfig>,
    logger: Logger,
    dispatcher: UseReducerDispatcher<PageState>,
    nav: Rc<RefCell<NavController>>,
    notifications: Rc<RefCell<NotificationQueue>>,
}

struct Attachments {
    _listeners: Vec<ListenerGuard>,
    _observers: Vec<ObserverGuard>,
}

impl Runtime {
    fn attach(&self) -> Attachments {
        let mut listeners = Vec::new();
        let mut observers = Vec::new();

        if let Some(win) = web_sys::window() {
            let runtime = self.clone();
            listeners.extend(ListenerGuard::new(win.clone(), "scroll", move |_| runtime.on_scroll()));
            let runtime = self.clone();
            listeners.extend(ListenerGuard::new(win, "resize", move |_| runtime.on_resize()));
        }

        if let Some(document) = dom::document() {
            let runtime = self.clone();
            listeners.extend(ListenerGuard::new(document.clone(), "click", move |event| {
                runtime.on_document_click(&event)
            }));
            let runtime = self.clone();
            listeners.extend(ListenerGuard::new(document, "keydown", move |event| {
                runtime.on_keydown(&event)
            }));
        }

        observers.extend(self.watch_counters());
        observers.extend(self.watch_skill_bars());
        observers.extend(self.watch_reveals());

        Attachments {
            _listeners: listeners,
            _observers: observers,
        }
    }

    fn sections(&self) -> Vec<scroll::Section> {
        dom::measure_sections(SECTIONS.iter().map(|section| section.id))
    }

    fn on_scroll(&self) {
        let viewport = dom::viewport();
        let probes = dom::reveal_probes(SCROLL_REVEAL_SELECTOR, REVEAL_ID_ATTR);
        let decision = scroll::derive(&viewport, &self.sections(), &probes, &self.config.scroll);

        if let Some(section_id) = decision.active_section.as_deref() {
            let changed = self.nav.borrow_mut().sync_to_section(section_id);
            if let Some(index) = changed {
                self.logger.debug(
                    "section_activated",
                    json!({ "section": section_id, "source": "scroll" }),
                );
                self.dispatcher.dispatch(PageAction::ActiveLink(index));
            }
        }

        self.dispatcher.dispatch(PageAction::Scrolled(decision));
    }

    fn on_document_click(&self, event: &Event) {
        let Some(anchor) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        event.prevent_default();

        let sections = self.sections();
        let header_height = dom::header_height();
        let link_index = dom::data_attr(&anchor, "data-section")
            .and_then(|section_id| self.nav.borrow().index_of(&section_id));

        if let Some(index) = link_index {
            let outcome = self
                .nav
                .borrow_mut()
                .on_link_click(index, &sections, header_height);

            if let Some(request) = outcome.scroll {
                dom::scroll_to(request.top);
            }
            if outcome.menu_closed {
                self.apply_menu(MobileMenuState::Closed);
            }
            if outcome.activated {
                self.logger
                    .debug("section_activated", json!({ "link": index, "source": "click" }));
                self.dispatcher.dispatch(PageAction::ActiveLink(index));
            }
            return;
        }

        let Some(href) = dom::data_attr(&anchor, "href") else {
            return;
        };
        let request = self
            .nav
            .borrow()
            .navigate_to(href.trim_start_matches('#'), &sections, header_height);
        if let Some(request) = request {
            dom::scroll_to(request.top);
        }
    }

    fn on_keydown(&self, event: &Event) {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };

        if event.key() == "Escape" && self.nav.borrow_mut().on_escape() {
            self.apply_menu(MobileMenuState::Closed);
        }
    }

    fn on_resize(&self) {
        let (token, wait_ms) = {
            let mut nav = self.nav.borrow_mut();
            (nav.on_resize(), nav.resize_wait_ms())
        };

        let runtime = self.clone();
        spawn_local(async move {
            sleep(Duration::from_millis(wait_ms)).await;
            let (width, _) = dom::viewport_size();
            let closed = runtime.nav.borrow_mut().on_resize_settled(token, width);
            if closed {
                runtime.apply_menu(MobileMenuState::Closed);
            }
        });
    }

    fn toggle_menu(&self) {
        let menu = self.nav.borrow_mut().toggle_mobile_menu();
        self.apply_menu(menu);
    }

    fn apply_menu(&self, menu: MobileMenuState) {
        dom::set_body_overflow(menu.body_overflow());
        self.logger
            .debug("menu_toggled", json!({ "open": menu.is_open() }));
        self.dispatcher.dispatch(PageAction::Menu(menu));
    }

    fn start_typing(&self, typing: Rc<RefCell<Option<TypingAnimator>>>) {
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            loop {
                let now = dom::now_ms();
                let (frame, wait_ms) = {
                    let mut slot = typing.borrow_mut();
                    let Some(animator) = slot.as_mut().filter(|animator| animator.is_running())
                    else {
                        break;
                    };
                    let frame = animator.tick(now);
                    (frame, animator.next_due_ms().saturating_sub(now).max(1))
                };

                if let Some(frame) = frame {
                    dispatcher.dispatch(PageAction::Typed(frame.text));
                }
                sleep(Duration::from_millis(wait_ms)).await;
            }
        });
    }

    fn start_splash(&self) {
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            let mut elapsed = 0;
            for delay in LoadingPhase::delays_ms() {
                sleep(Duration::from_millis(delay)).await;
                elapsed += delay;
                dispatcher.dispatch(PageAction::Loading(LoadingPhase::at(elapsed)));
            }
        });
    }

    fn watch_counters(&self) -> Option<ObserverGuard> {
        let runtime = self.clone();
        let mut latch = VisibilityLatch::new(self.config.observer.latch_threshold);

        ObserverGuard::observe_all(
            COUNTER_SELECTOR,
            self.config.observer.latch_threshold,
            "0px",
            move |entry| {
                let Some(id) = dom::data_index(&entry.target, "data-counter-id") else {
                    return;
                };
                latch.observe(id);
                if !latch.on_visibility(id, entry.intersecting, entry.ratio) {
                    return;
                }

                entry.unobserve();
                runtime.start_counter(id, dom::data_attr(&entry.target, "data-count"));
            },
        )
    }

    fn start_counter(&self, id: usize, raw: Option<String>) {
        let Some(target) = raw.as_deref().and_then(parse_count) else {
            self.logger
                .debug("counter_skipped", json!({ "counterId": id, "raw": raw }));
            return;
        };

        self.logger
            .debug("counter_started", json!({ "counterId": id, "target": target }));
        let steps = self.config.observer.counter_steps;
        let tick = Duration::from_millis(u64::from(self.config.observer.counter_tick_ms));
        let dispatcher = self.dispatcher.clone();

        spawn_local(async move {
            let mut counter = CounterAnimation::new(target, steps);
            loop {
                sleep(tick).await;
                let Some(frame) = counter.tick() else {
                    break;
                };
                dispatcher.dispatch(PageAction::Counter {
                    id,
                    display: frame.display,
                });
                if frame.done {
                    break;
                }
            }
        });
    }

    fn watch_skill_bars(&self) -> Option<ObserverGuard> {
        let runtime = self.clone();
        let mut latch = VisibilityLatch::new(self.config.observer.latch_threshold);

        ObserverGuard::observe_all(
            SKILL_SELECTOR,
            self.config.observer.latch_threshold,
            "0px",
            move |entry| {
                let Some(id) = dom::data_index(&entry.target, "data-skill-id") else {
                    return;
                };
                latch.observe(id);
                if !latch.on_visibility(id, entry.intersecting, entry.ratio) {
                    return;
                }

                entry.unobserve();
                let raw = entry
                    .target
                    .query_selector(".skill-progress")
                    .ok()
                    .flatten()
                    .and_then(|bar| dom::data_attr(&bar, "data-width"));
                runtime.start_skill_bar(id, raw);
            },
        )
    }

    fn start_skill_bar(&self, id: usize, raw: Option<String>) {
        let Some(width) = raw.as_deref().and_then(SkillWidth::parse) else {
            self.logger
                .debug("skill_bar_skipped", json!({ "skillId": id, "raw": raw }));
            return;
        };

        let delay = Duration::from_millis(u64::from(self.config.observer.skill_bar_delay_ms));
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            sleep(delay).await;
            dispatcher.dispatch(PageAction::SkillWidth {
                id,
                width: width.css(),
            });
        });
    }

    fn watch_reveals(&self) -> Option<ObserverGuard> {
        let dispatcher = self.dispatcher.clone();

        ObserverGuard::observe_all(
            OBSERVED_REVEAL_SELECTOR,
            self.config.observer.reveal_threshold,
            self.config.observer.reveal_root_margin,
            move |entry| {
                if !entry.intersecting {
                    return;
                }
                if let Some(id) = dom::data_index(&entry.target, REVEAL_ID_ATTR) {
                    dispatcher.dispatch(PageAction::Revealed(id));
                }
            },
        )
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        let created_at = dom::now_ms();
        let items = {
            let mut queue = self.notifications.borrow_mut();
            queue.push(message, kind, created_at);
            queue.items().to_vec()
        };
        self.dispatcher.dispatch(PageAction::Notifications(items));

        let runtime = self.clone();
        spawn_local(async move {
            let mut elapsed = 0;
            for offset in NotificationQueue::schedule_offsets_ms() {
                sleep(Duration::from_millis(offset - elapsed)).await;
                elapsed = offset;

                let now = dom::now_ms().max(created_at + offset);
                let items = {
                    let mut queue = runtime.notifications.borrow_mut();
                    if !queue.tick(now) {
                        continue;
                    }
                    queue.items().to_vec()
                };
                runtime
                    .dispatcher
                    .dispatch(PageAction::Notifications(items));
            }
        });
    }

    fn submit_contact(&self, event: SubmitEvent) {
        event.prevent_default();
        let Some(form) = event.target_dyn_into::<HtmlFormElement>() else {
            return;
        };

        let fields = FormData::new_with_form(&form)
            .ok()
            .and_then(|data| js_sys::try_iter(&data).ok().flatten())
            .map(|entries| entries.count())
            .unwrap_or(0);
        self.logger
            .info("contact_form_submitted", json!({ "fields": fields }));

        self.notify(CONTACT_SENT_MESSAGE, NotificationKind::Success);
        form.reset();
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let logger = Logger::new(config.log_level);

    let nav = {
        let config = config.clone();
        use_mut_ref(move || NavController::new(SECTIONS.iter().map(|section| section.id), &config.nav))
    };
    let typing = {
        let config = config.clone();
        use_mut_ref(move || TypingAnimator::new(&config.typing))
    };
    let notifications = use_mut_ref(NotificationQueue::new);
    let page = {
        let active_link = nav.borrow().active_index();
        use_reducer(move || PageState::initial(active_link))
    };

    let runtime = Runtime {
        config,
        logger,
        dispatcher: page.dispatcher(),
        nav,
        notifications,
    };

    {
        let runtime = runtime.clone();
        use_effect_with((), move |_| {
            let attachments = runtime.attach();
            runtime.start_typing(typing.clone());
            runtime.start_splash();
            runtime.logger.info(
                "app_mounted",
                json!({
                    "sections": SECTIONS.len(),
                    "phrases": runtime.config.typing.phrases.len(),
                }),
            );

            move || {
                drop(attachments);
                if let Some(animator) = typing.borrow_mut().as_mut() {
                    animator.stop();
                    runtime.logger.debug("typing_stopped", json!({}));
                }
            }
        });
    }

    let on_menu_toggle = {
        let runtime = runtime.clone();
        Callback::from(move |_: MouseEvent| runtime.toggle_menu())
    };
    let on_back_to_top = Callback::from(|_: MouseEvent| dom::scroll_to(0.0));
    let on_contact_submit = {
        let runtime = runtime.clone();
        Callback::from(move |event: SubmitEvent| runtime.submit_contact(event))
    };

    let state = &*page;
    let menu_open = state.menu.is_open();
    let nav_links = |class: &'static str| -> Html {
        SECTIONS
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let active = state.active_link == Some(index);
                html! {
                    <li>
                        <a
                            class={classes!(class, active.then_some("active"))}
                            href={format!("#{}", section.id)}
                            data-section={section.id}
                        >
                            {section.label}
                        </a>
                    </li>
                }
            })
            .collect()
    };

    html! {
        <>
            if state.loading.is_rendered() {
                <div id="loading-screen" class={classes!("loading-screen", state.loading.class())}>
                    <div class="loader" aria-hidden="true"></div>
                </div>
            }

            <header class="site-header" style={state.header.inline_style()}>
                <nav class="nav" aria-label="Primary">
                    <a class="logo" href="#home">{"JD"}</a>
                    <ul class="nav-links">{nav_links("nav-link")}</ul>
                    <button
                        id="mobileMenuBtn"
                        class={classes!("mobile-menu-btn", menu_open.then_some("active"))}
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_menu_toggle}
                    >
                        <span></span><span></span><span></span>
                    </button>
                </nav>
                <div id="mobileNav" class={classes!("mobile-nav", menu_open.then_some("active"))}>
                    <ul>{nav_links("mobile-nav-link")}</ul>
                </div>
            </header>

            <main>
                <section id="home" class="section hero">
                    <p class="eyebrow">{"Hi, I'm Jordan Diaz"}</p>
                    <h1>
                        <span id="typedText">{state.typed.clone()}</span>
                        <span id="cursor" class="cursor" aria-hidden="true">{"|"}</span>
                    </h1>
                    <div class="hero-actions">
                        <a class="btn primary" href="#projects">{"View work"}</a>
                        <a class="btn" href="#contact">{"Get in touch"}</a>
                    </div>
                </section>

                <section id="about" class="section">
                    <h2>{"About"}</h2>
                    <div class="stats">
                        {for STATS.iter().enumerate().map(|(index, (count, suffix, label))| html! {
                            <div class="stat">
                                <span
                                    class="stat-number"
                                    data-counter-id={index.to_string()}
                                    data-count={*count}
                                >
                                    {state.counters.get(&index).copied().unwrap_or(0).to_string()}
                                </span>
                                <span class="stat-suffix">{*suffix}</span>
                                <p class="stat-label">{*label}</p>
                            </div>
                        })}
                    </div>
                    <div class="specializations">
                        {for SPECIALIZATIONS.iter().enumerate().map(|(index, (title, blurb))| html! {
                            <article
                                class={classes!("specialization-card", state.is_revealed(RevealGroup::Specialization, index).then_some("fade-in"))}
                                data-reveal-id={reveal_id(RevealGroup::Specialization, index).to_string()}
                            >
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </article>
                        })}
                    </div>
                </section>

                <section id="skills" class="section">
                    <h2>{"Skills"}</h2>
                    {for SKILLS.iter().enumerate().map(|(index, (name, width))| {
                        let current = state.skill_widths.get(&index).map(String::as_str).unwrap_or("0%");
                        html! {
                            <div
                                class={classes!("skill-item", state.is_revealed(RevealGroup::Skill, index).then_some("fade-in"))}
                                data-skill-id={index.to_string()}
                                data-reveal-id={reveal_id(RevealGroup::Skill, index).to_string()}
                            >
                                <div class="skill-header">
                                    <span>{*name}</span>
                                    <span class="muted">{*width}</span>
                                </div>
                                <div class="skill-bar">
                                    <div class="skill-progress" data-width={*width} style={format!("width: {current};")}></div>
                                </div>
                            </div>
                        }
                    })}
                </section>

                <section id="experience" class="section">
                    <h2>{"Experience"}</h2>
                    <ol class="timeline">
                        {for TIMELINE.iter().enumerate().map(|(index, (period, role, organization, summary))| html! {
                            <li
                                class={classes!("timeline-item", state.is_revealed(RevealGroup::Timeline, index).then_some("fade-in"))}
                                data-reveal-id={reveal_id(RevealGroup::Timeline, index).to_string()}
                            >
                                <span class="muted">{*period}</span>
                                <h3>{*role}{" · "}{*organization}</h3>
                                <p>{*summary}</p>
                            </li>
                        })}
                    </ol>
                </section>

                <section id="projects" class="section">
                    <h2>{"Projects"}</h2>
                    <div class="projects">
                        {for PROJECTS.iter().enumerate().map(|(index, (title, summary, tags))| html! {
                            <article
                                class={classes!("project-card", state.is_revealed(RevealGroup::Project, index).then_some("fade-in"))}
                                data-reveal-id={reveal_id(RevealGroup::Project, index).to_string()}
                            >
                                <h3>{*title}</h3>
                                <p>{*summary}</p>
                                <ul class="tags">
                                    {for tags.iter().map(|tag| html! { <li>{*tag}</li> })}
                                </ul>
                            </article>
                        })}
                    </div>
                </section>

                <section id="contact" class="section">
                    <h2>{"Contact"}</h2>
                    <div class="contact-grid">
                        <ul class="contact-items">
                            {for CONTACT_ITEMS.iter().enumerate().map(|(index, (label, value))| html! {
                                <li
                                    class={classes!("contact-item", state.is_revealed(RevealGroup::Contact, index).then_some("fade-in"))}
                                    data-reveal-id={reveal_id(RevealGroup::Contact, index).to_string()}
                                >
                                    <span class="muted">{*label}</span>
                                    <span>{*value}</span>
                                </li>
                            })}
                        </ul>
                        <div class="contact-form">
                            <form onsubmit={on_contact_submit}>
                                <input name="name" type="text" placeholder="Your name" required=true />
                                <input name="email" type="email" placeholder="Your email" required=true />
                                <textarea name="message" rows="5" placeholder="Your message" required=true></textarea>
                                <button class="btn primary" type="submit">{"Send message"}</button>
                            </form>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="footer-links">
                    {for SECTIONS.iter().map(|section| html! {
                        <a href={format!("#{}", section.id)}>{section.label}</a>
                    })}
                </div>
                <p class="muted">{"© Jordan Diaz"}</p>
            </footer>

            <button
                id="backToTop"
                class={classes!("back-to-top", state.back_to_top_visible.then_some("visible"))}
                type="button"
                aria-label="Back to top"
                onclick={on_back_to_top}
            >
                {"↑"}
            </button>

            <div class="notifications" aria-live="polite">
                {for state.notifications.iter().map(|notification| html! {
                    <div
                        key={notification.id.to_string()}
                        class={classes!("notification", notification.kind.as_str())}
                        style={notification.inline_style()}
                    >
                        {notification.message.clone()}
                    </div>
                })}
            </div>
        </>
    }
}

pub fn run() {
    let root = dom::document()
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = SiteConfig::from_lookup(|name| root.get_attribute(name));

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
