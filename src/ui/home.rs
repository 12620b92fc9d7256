// SPDX-License-Identifier: MPL-2.0
//! Home page: the reader's profile card and a playground that raises every
//! kind of notification.

use crate::domain::User;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{
    inline, FocusId, FocusTracker, InlineSlot, ModalOptions, Service, Severity, Store,
};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Context attached to playground notifications.
pub const PLAYGROUND_CONTEXT: &str = "test";
/// Context of the inline slot under the playground.
pub const INLINE_CONTEXT: &str = "test-inline";

pub const TOGGLE_NAME: FocusId = FocusId::new("home-toggle-name");

/// One playground button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    SuccessToast,
    WarningToast,
    DangerToast,
    SuccessInfo,
    WarningInfo,
    DangerInfo,
    DeleteConfirmation,
    SaveConfirmation,
    SuccessInline,
    WarningInline,
    DangerInline,
}

impl Demo {
    pub const ALL: [Demo; 11] = [
        Demo::SuccessToast,
        Demo::WarningToast,
        Demo::DangerToast,
        Demo::SuccessInfo,
        Demo::WarningInfo,
        Demo::DangerInfo,
        Demo::DeleteConfirmation,
        Demo::SaveConfirmation,
        Demo::SuccessInline,
        Demo::WarningInline,
        Demo::DangerInline,
    ];

    #[must_use]
    pub fn focus_id(self) -> FocusId {
        match self {
            Demo::SuccessToast => FocusId::new("playground-success-toast"),
            Demo::WarningToast => FocusId::new("playground-warning-toast"),
            Demo::DangerToast => FocusId::new("playground-danger-toast"),
            Demo::SuccessInfo => FocusId::new("playground-success-info"),
            Demo::WarningInfo => FocusId::new("playground-warning-info"),
            Demo::DangerInfo => FocusId::new("playground-danger-info"),
            Demo::DeleteConfirmation => FocusId::new("playground-delete-confirmation"),
            Demo::SaveConfirmation => FocusId::new("playground-save-confirmation"),
            Demo::SuccessInline => FocusId::new("playground-success-inline"),
            Demo::WarningInline => FocusId::new("playground-warning-inline"),
            Demo::DangerInline => FocusId::new("playground-danger-inline"),
        }
    }

    /// Button label key.
    fn label_key(self) -> &'static str {
        // Focus ids double as label keys.
        self.focus_id().name()
    }

    fn severity(self) -> Severity {
        match self {
            Demo::SuccessToast | Demo::SuccessInfo | Demo::SuccessInline => Severity::Success,
            Demo::WarningToast
            | Demo::WarningInfo
            | Demo::SaveConfirmation
            | Demo::WarningInline => Severity::Warning,
            Demo::DangerToast
            | Demo::DangerInfo
            | Demo::DeleteConfirmation
            | Demo::DangerInline => Severity::Danger,
        }
    }

    /// Raises the notification this button stands for.
    pub fn run(self, service: &Service, i18n: &I18n) {
        let severity = self.severity();
        let shown = match self {
            Demo::SuccessToast => raise_toast(service, i18n, "playground-message-success", severity),
            Demo::WarningToast => raise_toast(service, i18n, "playground-message-warning", severity),
            Demo::DangerToast => raise_toast(service, i18n, "playground-message-danger", severity),
            Demo::SuccessInfo => raise_info(service, i18n, "playground-message-saved", severity),
            Demo::WarningInfo => raise_info(service, i18n, "playground-message-unsaved", severity),
            Demo::DangerInfo => raise_info(service, i18n, "playground-message-critical", severity),
            Demo::DeleteConfirmation => raise_ask(
                service,
                i18n,
                "playground-message-delete",
                "playground-action-delete",
                "playground-message-deleted",
                severity,
            ),
            Demo::SaveConfirmation => raise_ask(
                service,
                i18n,
                "playground-message-save",
                "playground-action-save",
                "playground-message-changes-saved",
                severity,
            ),
            Demo::SuccessInline => raise_inline(service, i18n, "playground-message-inline-success", severity),
            Demo::WarningInline => raise_inline(service, i18n, "playground-message-inline-warning", severity),
            Demo::DangerInline => raise_inline(service, i18n, "playground-message-inline-danger", severity),
        };

        if let Err(err) = shown {
            log::error!("playground {:?}: {err}", self);
        }
    }
}

type Shown = Result<(), crate::ui::notifications::NotificationError>;

fn raise_toast(service: &Service, i18n: &I18n, key: &str, severity: Severity) -> Shown {
    service.show_toast(i18n.tr(key), severity, Some(PLAYGROUND_CONTEXT));
    Ok(())
}

fn raise_inline(service: &Service, i18n: &I18n, key: &str, severity: Severity) -> Shown {
    service.show_inline(i18n.tr(key), severity, INLINE_CONTEXT);
    Ok(())
}

fn raise_info(service: &Service, i18n: &I18n, key: &str, severity: Severity) -> Shown {
    let options = ModalOptions::new().context(PLAYGROUND_CONTEXT);
    service.show_modal(i18n.tr(key), severity, options).map(drop)
}

fn raise_ask(
    service: &Service,
    i18n: &I18n,
    key: &str,
    action_key: &str,
    done_key: &str,
    severity: Severity,
) -> Shown {
    let follow_up = service.clone();
    let done = i18n.tr(done_key);
    let options = ModalOptions::new()
        .context(PLAYGROUND_CONTEXT)
        .action_label(i18n.tr(action_key))
        .on_action(move || {
            log::info!("playground action confirmed");
            follow_up.show_toast(done.clone(), Severity::Success, None);
        });
    service.show_modal(i18n.tr(key), severity, options).map(drop)
}

/// Focus stops of the page, in order.
#[must_use]
pub fn focus_ring() -> Vec<FocusId> {
    std::iter::once(TOGGLE_NAME)
        .chain(Demo::ALL.iter().map(|demo| demo.focus_id()))
        .collect()
}

/// Returns the message a focused control triggers on Enter.
#[must_use]
pub fn activate(id: FocusId) -> Option<Message> {
    if id == TOGGLE_NAME {
        return Some(Message::ToggleName);
    }
    Demo::ALL
        .into_iter()
        .find(|demo| demo.focus_id() == id)
        .map(Message::Play)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleName,
    Play(Demo),
    Inline(inline::Message),
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub focus: &'a FocusTracker,
}

/// Page state: the loaded profile and the name-visibility toggle.
#[derive(Debug)]
pub struct State {
    me: Option<User>,
    hide_name: bool,
    inline: InlineSlot,
}

impl State {
    #[must_use]
    pub fn new(store: &Store) -> Self {
        Self {
            me: None,
            hide_name: false,
            inline: InlineSlot::new(store, INLINE_CONTEXT),
        }
    }

    #[must_use]
    pub fn me(&self) -> Option<&User> {
        self.me.as_ref()
    }

    pub fn set_me(&mut self, user: User) {
        self.me = Some(user);
    }

    #[must_use]
    pub fn hide_name(&self) -> bool {
        self.hide_name
    }

    #[must_use]
    pub fn inline(&self) -> &InlineSlot {
        &self.inline
    }

    pub fn update(&mut self, message: Message, service: &Service, i18n: &I18n) {
        match message {
            Message::ToggleName => self.hide_name = !self.hide_name,
            Message::Play(demo) => demo.run(service, i18n),
            Message::Inline(message) => self.inline.update(message),
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'_>) -> Element<'a, Message> {
        Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(self.view_profile(&ctx))
            .push(self.view_playground(&ctx))
            .into()
    }

    fn view_profile<'a>(&self, ctx: &ViewContext<'_>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let Some(me) = &self.me else {
            return Text::new(i18n.tr("profile-loading"))
                .size(typography::BODY)
                .into();
        };

        let mut info = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("profile-title")).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr_with_args("profile-email", &[("email", me.email.as_str())])));
        if !self.hide_name {
            let name = me.full_name();
            info = info.push(Text::new(
                i18n.tr_with_args("profile-name", &[("name", name.as_str())]),
            ));
        }

        let toggle_key = if self.hide_name {
            "profile-show-name"
        } else {
            "profile-hide-name"
        };
        let toggle = button(Text::new(i18n.tr(toggle_key)))
            .on_press(Message::ToggleName)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::focus_ring(
                styles::button::unselected,
                ctx.focus.is_focused(TOGGLE_NAME),
            ));

        Container::new(Column::new().spacing(spacing::SM).push(info).push(toggle))
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }

    fn view_playground<'a>(&self, ctx: &ViewContext<'_>) -> Element<'a, Message> {
        let sections = [
            ("playground-toasts", 0..3),
            ("playground-info-modals", 3..6),
            ("playground-ask-modals", 6..8),
            ("playground-inline", 8..11),
        ];

        let mut content = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(ctx.i18n.tr("playground-title")).size(typography::TITLE_MD));

        for (title_key, range) in sections {
            let buttons = Demo::ALL[range].iter().fold(
                Row::new().spacing(spacing::XS).align_y(alignment::Vertical::Center),
                |row, demo| {
                    row.push(
                        button(Text::new(ctx.i18n.tr(demo.label_key())))
                            .on_press(Message::Play(*demo))
                            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                            .padding([spacing::XS, spacing::SM])
                            .style(styles::button::focus_ring(
                                styles::button::tinted(demo.severity().color()),
                                ctx.focus.is_focused(demo.focus_id()),
                            )),
                    )
                },
            );
            content = content.push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_SM))
                    .push(buttons),
            );
        }

        content = content.push(self.inline.view().map(Message::Inline));

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::ui::notifications::{Kind, ModalSurface, Prompt};

    struct Fixture {
        service: Service,
        i18n: I18n,
        page: State,
    }

    fn fixture() -> Fixture {
        let store = Store::new();
        Fixture {
            page: State::new(&store),
            service: Service::new(store),
            i18n: I18n::new(Some("en-US".into()), &Config::default()),
        }
    }

    #[test]
    fn toggle_name_flips_visibility() {
        let mut f = fixture();
        assert!(!f.page.hide_name());
        f.page.update(Message::ToggleName, &f.service, &f.i18n);
        assert!(f.page.hide_name());
        f.page.update(Message::ToggleName, &f.service, &f.i18n);
        assert!(!f.page.hide_name());
    }

    #[test]
    fn toast_demos_raise_contextual_toasts() {
        let mut f = fixture();
        f.page
            .update(Message::Play(Demo::WarningToast), &f.service, &f.i18n);

        let shown = f.service.store().notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind(), Kind::Toast);
        assert_eq!(shown[0].severity(), Severity::Warning);
        assert_eq!(shown[0].context(), Some(PLAYGROUND_CONTEXT));
        assert_eq!(
            shown[0].message(),
            "This is a warning message. Please be careful!"
        );
    }

    #[test]
    fn info_demos_raise_info_modals() {
        let mut f = fixture();
        f.page
            .update(Message::Play(Demo::DangerInfo), &f.service, &f.i18n);

        let shown = f.service.store().notifications();
        assert_eq!(shown[0].kind(), Kind::Modal);
        assert!(matches!(shown[0].prompt(), Prompt::Info));
    }

    #[test]
    fn confirming_an_ask_demo_shows_a_success_toast() {
        let mut f = fixture();
        let modal = ModalSurface::new(f.service.store(), &FocusTracker::new());
        f.page
            .update(Message::Play(Demo::DeleteConfirmation), &f.service, &f.i18n);

        let current = modal.current().expect("modal displayed");
        assert_eq!(current.prompt().action_label(), Some("Delete"));

        modal.update(crate::ui::notifications::modal::Message::Confirm);

        let shown = f.service.store().notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind(), Kind::Toast);
        assert_eq!(shown[0].severity(), Severity::Success);
        assert_eq!(shown[0].message(), "Item successfully deleted");
        assert_eq!(shown[0].context(), None);
    }

    #[test]
    fn inline_demos_fill_the_page_slot() {
        let mut f = fixture();
        f.page
            .update(Message::Play(Demo::SuccessInline), &f.service, &f.i18n);
        f.page
            .update(Message::Play(Demo::DangerInline), &f.service, &f.i18n);

        let current = f.page.inline().current().expect("inline shown");
        assert_eq!(current.message(), "Inline success message!");

        f.page.update(
            Message::Inline(inline::Message::Dismiss(current.id())),
            &f.service,
            &f.i18n,
        );
        let next = f.page.inline().current().expect("next inline shown");
        assert_eq!(next.message(), "Inline error message!");
    }

    #[test]
    fn every_focus_stop_activates_something() {
        let ring = focus_ring();
        assert_eq!(ring.len(), Demo::ALL.len() + 1);
        for id in ring {
            assert!(activate(id).is_some(), "{} is inert", id.name());
        }
        assert_eq!(activate(FocusId::new("unknown")), None);
    }

    #[test]
    fn every_demo_has_a_label() {
        let f = fixture();
        for demo in Demo::ALL {
            assert!(!f.i18n.tr(demo.label_key()).starts_with("MISSING"));
        }
    }

    #[test]
    fn view_renders_loading_and_loaded_profile() {
        let mut f = fixture();
        let focus = FocusTracker::new();
        let _ = f.page.view(ViewContext {
            i18n: &f.i18n,
            focus: &focus,
        });

        f.page.set_me(User {
            email: "reader@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        });
        focus.focus(TOGGLE_NAME);
        let _ = f.page.view(ViewContext {
            i18n: &f.i18n,
            focus: &focus,
        });
    }
}
