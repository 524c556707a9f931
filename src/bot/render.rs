//! User-visible message texts and keyboards
//!
//! Texts are Indonesian, matching the chat surface this bot serves. Times
//! render as `%H:%M:%S`, durations as minutes with two decimals.

use crate::core::{Denial, UserId};
use crate::telegram::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::tracker::{Activity, ClosedLeave, LeaveRecord};

use super::payload::ControlPayload;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Which control a denial came from; ownership denials word the two cases
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeniedAction {
    Start,
    End,
}

pub fn greeting(full_name: &str) -> String {
    format!("Halo {}, Mau kemana?:", full_name)
}

/// The activity chooser: one button per row, payloads owned by `owner_id`
pub fn activity_keyboard(owner_id: UserId) -> InlineKeyboardMarkup {
    let rows = Activity::ALL
        .iter()
        .map(|activity| {
            vec![InlineKeyboardButton::new(
                activity.button_label(),
                ControlPayload::start(owner_id, activity.key()).encode(),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// The single close button attached to a confirmation
pub fn end_keyboard(owner_id: UserId) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::single(InlineKeyboardButton::new(
        "✅ Akhiri Izin",
        ControlPayload::end(owner_id).encode(),
    ))
}

/// Confirmation after a leave starts. The deadline line appears only when
/// the activity has a time limit.
pub fn leave_started(full_name: &str, record: &LeaveRecord) -> String {
    let opening = format!(
        "{} izin '{}' dimulai pada {}.",
        full_name,
        record.label,
        record.started_at.format(TIME_FORMAT)
    );
    match record.deadline {
        Some(deadline) => format!(
            "{}\nHarus kembali sebelum {}.\n\nUdah balik? jangan lupa klik Akhiri Izin.",
            opening,
            deadline.format(TIME_FORMAT)
        ),
        None => format!(
            "{}\n\nUdah balik? jangan lupa klik Akhiri Izin.",
            opening
        ),
    }
}

/// Completion message after a leave closes
pub fn leave_finished(full_name: &str, closed: &ClosedLeave) -> String {
    format!(
        "Izin '{}' untuk {} selesai pada {}.\nDurasi: {:.2} menit.",
        closed.record.label,
        full_name,
        closed.ended_at.format(TIME_FORMAT),
        closed.duration_minutes()
    )
}

/// Chat text for a denial, worded per control kind
pub fn denial_text(denial: &Denial, action: DeniedAction, clicker_name: &str) -> String {
    match denial {
        Denial::OwnershipMismatch {
            owner_id,
            requester_id,
        } => match action {
            DeniedAction::Start => format!(
                "❌ Tombol izin milik user ID {} diklik oleh {} (id {}) – DITOLAK.",
                owner_id, clicker_name, requester_id
            ),
            DeniedAction::End => format!(
                "❌ Tombol AKHIRI izin milik user ID {} diklik oleh {} – DITOLAK.",
                owner_id, clicker_name
            ),
        },
        Denial::AlreadyActive { label } => format!(
            "❌ {} masih punya izin aktif '{}'. Akhiri dulu.",
            clicker_name, label
        ),
        Denial::UnknownActivity { .. } => "Aktivitas tidak dikenali.".to_string(),
        Denial::NoActivePermission => "❌ Kamu tidak punya izin aktif.".to_string(),
        Denial::MalformedControlPayload { .. } => "❌ Tombol rusak, coba /start lagi.".to_string(),
        Denial::UnrecognizedControl { .. } => "❌ Tombol tidak dikenali.".to_string(),
    }
}
