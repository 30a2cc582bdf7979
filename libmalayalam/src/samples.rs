//! Free-practice texts, cycled in order.

pub const MALAYALAM_SAMPLES: &[&str] = &[
    "മലയാളം എന്റെ മാതൃഭാഷയാണ്.",
    "കേരളം ദൈവത്തിന്റെ സ്വന്തം നാടാണ്.",
    "ഓണം കേരളത്തിന്റെ ദേശീയ ഉത്സവമാണ്.",
    "മഴ പെയ്യുമ്പോൾ മണ്ണിന് ഒരു പ്രത്യേക മണമാണ്.",
    "വായന നമ്മുടെ അറിവ് വർദ്ധിപ്പിക്കുന്നു.",
    "കുട്ടികൾ പുഴയുടെ തീരത്ത് കളിക്കുന്നു.",
];

pub fn malayalam_samples() -> Vec<String> {
    MALAYALAM_SAMPLES.iter().map(|s| s.to_string()).collect()
}
