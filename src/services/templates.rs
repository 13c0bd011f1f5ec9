use crate::models::{Intent, Language};

pub fn canned_reply(intent: Intent, language: Language) -> &'static str {
    match (intent, language) {
        (Intent::Timings, Language::English) => {
            "Our clinic is open from 9am to 9pm, Sunday to Thursday."
        }
        (Intent::Timings, Language::Arabic) => {
            "ساعات العمل من الساعة ٩ صباحًا إلى ٩ مساءً من الأحد إلى الخميس."
        }
        (Intent::Location, Language::English) => {
            "We are located on King Fahd Road, Riyadh. Google Maps: https://maps.google.com"
        }
        (Intent::Location, Language::Arabic) => {
            "نحن في طريق الملك فهد، الرياض. خرائط جوجل: https://maps.google.com"
        }
        (Intent::Price, Language::English) => {
            "Consultation is 100 SAR. Whitening starts from 500 SAR."
        }
        (Intent::Price, Language::Arabic) => {
            "سعر الاستشارة العامة هو ١٠٠ ريال. يبدأ تبييض الأسنان من ٥٠٠ ريال."
        }
        (Intent::Booking, Language::English) => {
            "Please share your preferred date and time. We\u{2019}ll confirm your appointment shortly."
        }
        (Intent::Booking, Language::Arabic) => {
            "فضلًا أرسل اليوم والوقت المناسب وسنقوم بتأكيد الموعد."
        }
    }
}
