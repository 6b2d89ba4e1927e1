use chrono::{Datelike, NaiveDate};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            c if c == "ar" || c.starts_with("ar-") => Some(Lang::Ar),
            _ => None,
        }
    }

    /// Value of the root `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Lang::Ar
    }

    /// Name shown in the language menu, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ar => "العربية",
        }
    }
}

/// Flat string table of one language.
#[derive(Debug)]
pub struct Dictionary {
    lang: Lang,
    entries: &'static [(&'static str, &'static str)],
}

impl Dictionary {
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Exact lookup, no fallback to another language.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The string table for `lang`.
pub fn lookup(lang: Lang) -> &'static Dictionary {
    match lang {
        Lang::En => &EN,
        Lang::Ar => &AR,
    }
}

/// Translate a key for a given language. Falls back to English, then to the key.
pub fn t(lang: Lang, key: &str) -> String {
    if let Some(text) = lookup(lang).get(key) {
        return text.to_string();
    }
    tracing::warn!("i18n: missing key {key:?} for {}", lang.code());
    EN.get(key).unwrap_or(key).to_string()
}

/// [`t`] with `{n}` replaced by `n`.
pub fn t_n(lang: Lang, key: &str, n: impl std::fmt::Display) -> String {
    t(lang, key).replace("{n}", &n.to_string())
}

/// "Dec 30, 2024" / "30 ديسمبر 2024".
pub fn format_date(lang: Lang, date: NaiveDate) -> String {
    let month = t(lang, MONTH_KEYS[date.month0() as usize]);
    match lang {
        Lang::En => format!("{month} {}, {}", date.day(), date.year()),
        Lang::Ar => format!("{} {month} {}", date.day(), date.year()),
    }
}

/// "3:00 PM" / "3:00 م".
pub fn format_time(lang: Lang, (hour, minute): (u8, u8)) -> String {
    let suffix = if hour < 12 { "time.am" } else { "time.pm" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12}:{minute:02} {}", t(lang, suffix))
}

const MONTH_KEYS: [&str; 12] = [
    "month.jan", "month.feb", "month.mar", "month.apr", "month.may", "month.jun", "month.jul",
    "month.aug", "month.sep", "month.oct", "month.nov", "month.dec",
];

static EN: Dictionary = Dictionary {
    lang: Lang::En,
    entries: &[
        // Nav / common
        ("app.name", "InternWay"),
        ("nav.home", "Home"),
        ("nav.features", "Features"),
        ("nav.how_it_works", "How It Works"),
        ("nav.login", "Login"),
        ("nav.signup", "Sign Up"),
        ("nav.dashboard", "Dashboard"),
        ("nav.internships", "Internships"),
        ("nav.mentorships", "Mentorships"),
        ("nav.profile", "Profile"),
        ("nav.my_sessions", "My Sessions"),
        ("nav.logout", "Logout"),
        ("nav.notifications", "Notifications"),
        ("common.back", "Back"),
        ("common.get_started", "Get Started"),
        ("common.learn_more", "Learn More"),
        ("common.continue", "Continue"),
        ("common.loading", "Loading…"),
        ("common.please_wait", "Please wait…"),
        ("common.unavailable", "Unavailable"),
        ("common.match", "Match"),
        ("common.apply_now", "Apply Now"),
        ("common.book_session", "Book Session"),
        ("common.dismiss", "Dismiss"),
        ("common.error", "Error"),
        ("pref.change_language", "Change Language"),
        ("pref.toggle_theme", "Toggle Theme"),
        // Landing
        ("home.hero_title", "Find Your Perfect Internship Match"),
        ("home.hero_subtitle", "Connect with mentors and companies through AI-powered matching"),
        ("home.features_subtitle", "Discover what makes InternWay the perfect platform for your internship journey"),
        ("home.feature.matching.title", "Smart Matching with AI"),
        ("home.feature.matching.body", "Our AI algorithm matches you with the best opportunities"),
        ("home.feature.cv.title", "CV Analysis"),
        ("home.feature.cv.body", "Get instant feedback on your CV to improve your chances"),
        ("home.feature.booking.title", "Mentorship Booking"),
        ("home.feature.booking.body", "Book sessions with experienced mentors in your field"),
        ("home.feature.quality.title", "Quality Opportunities"),
        ("home.feature.quality.body", "Access curated internships from top companies"),
        ("home.how_subtitle", "Get started in three simple steps"),
        ("home.step.profile.title", "Create Your Profile"),
        ("home.step.profile.body", "Sign up and complete your profile with your skills and interests"),
        ("home.step.match.title", "Get Matched"),
        ("home.step.match.body", "Our AI finds the best opportunities tailored for you"),
        ("home.step.journey.title", "Start Your Journey"),
        ("home.step.journey.body", "Connect with mentors and apply to internships"),
        ("home.stat.students", "Active Students"),
        ("home.stat.companies", "Partner Companies"),
        ("home.stat.mentors", "Expert Mentors"),
        ("home.stat.success", "Success Rate"),
        ("home.ready", "Ready to Start Your Journey?"),
        ("home.join_thousands", "Join thousands of students who found their perfect internship match"),
        ("home.get_started_now", "Get Started Now"),
        ("home.footer", "All rights reserved."),
        // Role selection
        ("role.title", "Create Your Account"),
        ("role.subtitle", "Select Your Role"),
        ("role.student", "Student"),
        ("role.student_desc", "Looking for internships & mentorship"),
        ("role.mentor", "Mentor"),
        ("role.mentor_desc", "Guiding the next generation"),
        ("role.company", "Company"),
        ("role.company_desc", "Hiring top talent"),
        ("role.select_first", "Please select a role first"),
        // Login
        ("login.welcome_title", "Welcome to InternWay"),
        ("login.welcome_subtitle", "Your journey to the perfect internship starts here"),
        ("login.title", "Welcome Back"),
        ("login.subtitle", "Enter your credentials to access your account."),
        ("login.role_title", "Select Your Role"),
        ("login.remember_me", "Remember Me"),
        ("login.forgot_password", "Forgot Password?"),
        ("login.button", "Login"),
        ("login.no_account", "Don't have an account?"),
        ("login.failed", "Login failed"),
        // Shared form labels
        ("form.email_label", "Email *"),
        ("form.email_placeholder", "Enter your email"),
        ("form.password_label", "Password *"),
        ("form.password_placeholder", "Enter your password"),
        ("form.confirm_password", "Confirm Password"),
        ("form.full_name", "Full Name"),
        ("form.university", "University"),
        ("form.college", "College"),
        ("form.degree", "Degree"),
        ("form.major", "Major"),
        ("form.grad_year", "Graduation Year"),
        ("form.work_email", "Work Email"),
        ("form.company_name", "Company Name"),
        ("form.industry", "Industry"),
        ("form.location", "Location"),
        ("form.website", "Website (Optional)"),
        ("form.address", "Address (Optional)"),
        ("form.company_overview", "Company Overview"),
        ("form.company_placeholder", "Tell us about your company vision and what you do..."),
        ("form.expertise", "Field of Expertise"),
        ("form.years_experience", "Years of Experience"),
        ("form.job_title", "Current Job Title"),
        ("form.linkedin", "LinkedIn / Profile URL"),
        // Signup
        ("signup.create_account", "Create Account"),
        ("signup.start_journey", "Start your career journey with InternWay"),
        ("signup.upload_cv", "Upload CV / Resume"),
        ("signup.click_to_upload", "Click to upload or drag and drop"),
        ("signup.max_size", "PDF, DOCX (Max 5MB)"),
        ("signup.already_have_account", "Already have an account?"),
        ("signup.company.title", "Create Company Account"),
        ("signup.company.subtitle", "Complete your company profile to hire talent"),
        ("signup.mentor.title", "Create Mentor Account"),
        ("signup.mentor.subtitle", "Share your experience and guide students"),
        ("signup.success", "Account Created Successfully!"),
        ("signup.failed", "Registration failed. Please try again."),
        // Validation
        ("validation.required", "Required"),
        ("validation.invalid_email", "Invalid email"),
        ("validation.min_chars", "Min {n} chars"),
        ("validation.mismatch", "Mismatch"),
        ("validation.invalid_url", "Invalid URL"),
        ("validation.start_with_http", "Start with http"),
        ("validation.invalid", "Invalid"),
        ("validation.max_file_size", "Max {n}MB"),
        // Password recovery
        ("auth.back_to_login", "Back to Login"),
        ("forgot.title", "Forgot Password?"),
        ("forgot.subtitle", "Enter your email address and we'll send you a link to reset your password."),
        ("forgot.email_label", "Email Address *"),
        ("forgot.send", "Send Reset Link"),
        ("forgot.success_title", "Check Your Email"),
        ("forgot.success_message", "We've sent a password reset link to your email address. Please check your inbox and follow the instructions."),
        ("forgot.invalid_email", "Please enter a valid email address"),
        ("forgot.email_required", "Email is required"),
        ("forgot.failed", "An error occurred. Please try again."),
        ("reset.title", "Reset Your Password"),
        ("reset.subtitle", "Enter your new password below."),
        ("reset.new_password_label", "New Password *"),
        ("reset.new_password_placeholder", "Enter new password"),
        ("reset.confirm_label", "Confirm Password *"),
        ("reset.confirm_placeholder", "Confirm new password"),
        ("reset.button", "Reset Password"),
        ("reset.success_title", "Password Reset Successful"),
        ("reset.success_message", "Your password has been reset successfully. You can now login with your new password."),
        ("reset.password_required", "Password is required"),
        ("reset.password_too_short", "Password must be at least 8 characters"),
        ("reset.password_mismatch", "Passwords do not match"),
        ("reset.invalid_token", "Invalid or expired reset link"),
        ("reset.token_required", "Reset token is missing"),
        // Student dashboard
        ("student.welcome_back", "Welcome back!"),
        ("student.career_journey", "Here's what's happening with your career journey"),
        ("student.internships_applied", "Internships Applied"),
        ("student.sessions_booked", "Sessions Booked"),
        ("student.upcoming_session", "Upcoming Session"),
        ("student.recommended_internships", "Recommended Internships"),
        ("student.recommended_mentors", "Recommended Mentors"),
        ("student.no_internships", "No recommended internships yet"),
        ("student.no_mentors", "No recommended mentors yet"),
        ("student.applied", "Application submitted successfully!"),
        ("student.session_booked", "Session booked successfully!"),
        // Internships
        ("internships.title", "Browse Internships"),
        ("internships.subtitle", "Find the perfect opportunity to launch your career"),
        ("internships.search", "Search internships or companies..."),
        ("internships.all_locations", "All Locations"),
        ("internships.all_types", "All Types"),
        ("internships.deadline", "Deadline"),
        ("internships.unpaid", "Unpaid"),
        ("internships.per_month", "EGP/month"),
        ("internships.none", "No internships match your filters"),
        ("work.remote", "Remote"),
        ("work.hybrid", "Hybrid"),
        ("work.on_site", "On-site"),
        // Mentorships
        ("mentorships.title", "Find a Mentor"),
        ("mentorships.subtitle", "Connect with professionals who can guide your career"),
        ("mentorships.search", "Search mentors by name, title or skill..."),
        ("mentorships.all_fields", "All Fields"),
        ("mentorships.years", "years"),
        ("mentorships.reviews", "reviews"),
        ("mentorships.next_available", "Next available"),
        ("mentorships.none", "No mentors found"),
        ("mentorships.booking", "Booking session with"),
        ("field.software", "Software Engineering"),
        ("field.data", "Data Science"),
        ("field.ai", "AI & ML"),
        ("field.design", "Design"),
        // Sessions
        ("sessions.title", "My Sessions"),
        ("sessions.subtitle", "Manage your booked mentorship sessions"),
        ("sessions.with", "with"),
        ("sessions.completed", "Completed"),
        ("sessions.confirmed", "Confirmed"),
        ("sessions.waiting", "Waiting for confirmation"),
        ("sessions.join", "Join Meeting"),
        ("sessions.waiting_button", "Awaiting Mentor"),
        ("sessions.reschedule", "Reschedule"),
        ("sessions.cancel", "Cancel"),
        ("sessions.cancelled", "Session cancelled"),
        ("sessions.leave_review", "Leave Review"),
        ("sessions.none", "You have no sessions yet"),
        // Profile
        ("profile.title", "My Profile"),
        ("profile.subtitle", "Keep your information up to date"),
        ("profile.personal", "Personal Information"),
        ("profile.full_name", "Full Name"),
        ("profile.email", "Email Address"),
        ("profile.phone", "Phone Number"),
        ("profile.location", "Location"),
        ("profile.education", "Education"),
        ("profile.university", "University"),
        ("profile.college", "College"),
        ("profile.major", "Major"),
        ("profile.graduation_year", "Graduation Year"),
        ("profile.skills", "Skills"),
        ("profile.add_skill_placeholder", "Add a skill"),
        ("profile.add", "Add"),
        ("profile.upload_cv_title", "Upload CV"),
        ("profile.drag_drop_cv", "Drag and drop your CV here"),
        ("profile.click_browse", "or click to browse (PDF, DOC, DOCX)"),
        ("profile.file_selected", "File selected"),
        ("profile.click_to_change", "Click to change"),
        ("profile.save", "Save Changes"),
        ("profile.saved", "Profile saved successfully!"),
        ("profile.bad_cv_type", "Please upload a PDF, DOC, or DOCX file"),
        // Mentor dashboard
        ("mentor.welcome", "Welcome back, Mentor!"),
        ("mentor.subtitle", "Here's an overview of your mentoring activity"),
        ("mentor.total_sessions", "Total Sessions"),
        ("mentor.active_mentees", "Active Mentees"),
        ("mentor.hours_this_month", "Hours This Month"),
        ("mentor.upcoming_sessions", "Upcoming Sessions"),
        ("mentor.recent_mentees", "Recent Mentees"),
        ("mentor.my_mentees", "My Mentees"),
        ("mentor.no_sessions", "No upcoming sessions"),
        ("mentor.no_mentees", "No mentees yet"),
        ("mentor.sessions_completed", "sessions completed"),
        ("mentor.today", "Today"),
        ("mentor.tomorrow", "Tomorrow"),
        ("mentor.topic.career_guidance", "Career Guidance"),
        ("mentor.topic.resume_review", "Resume Review"),
        ("mentor.topic.interview_prep", "Interview Preparation"),
        ("mentor.field.software", "Software Engineering"),
        ("mentor.field.data", "Data Science"),
        ("mentor.field.design", "Design"),
        // Time
        ("time.am", "AM"),
        ("time.pm", "PM"),
        ("time.hour", "hour"),
        ("time.min", "min"),
        ("month.jan", "Jan"),
        ("month.feb", "Feb"),
        ("month.mar", "Mar"),
        ("month.apr", "Apr"),
        ("month.may", "May"),
        ("month.jun", "Jun"),
        ("month.jul", "Jul"),
        ("month.aug", "Aug"),
        ("month.sep", "Sep"),
        ("month.oct", "Oct"),
        ("month.nov", "Nov"),
        ("month.dec", "Dec"),
    ],
};

static AR: Dictionary = Dictionary {
    lang: Lang::Ar,
    entries: &[
        // Nav / common
        ("app.name", "InternWay"),
        ("nav.home", "الرئيسية"),
        ("nav.features", "المميزات"),
        ("nav.how_it_works", "كيف يعمل"),
        ("nav.login", "دخول"),
        ("nav.signup", "تسجيل"),
        ("nav.dashboard", "لوحة التحكم"),
        ("nav.internships", "التدريبات"),
        ("nav.mentorships", "الإرشاد"),
        ("nav.profile", "الملف الشخصي"),
        ("nav.my_sessions", "جلساتي"),
        ("nav.logout", "تسجيل الخروج"),
        ("nav.notifications", "الإشعارات"),
        ("common.back", "رجوع"),
        ("common.get_started", "ابدأ الآن"),
        ("common.learn_more", "اعرف المزيد"),
        ("common.continue", "متابعة"),
        ("common.loading", "جارٍ التحميل…"),
        ("common.please_wait", "يرجى الانتظار…"),
        ("common.unavailable", "غير متاح"),
        ("common.match", "توافق"),
        ("common.apply_now", "قدّم الآن"),
        ("common.book_session", "احجز جلسة"),
        ("common.dismiss", "إغلاق"),
        ("common.error", "خطأ"),
        ("pref.change_language", "تغيير اللغة"),
        ("pref.toggle_theme", "تبديل المظهر"),
        // Landing
        ("home.hero_title", "اعثر على فرصتك المثالية"),
        ("home.hero_subtitle", "تواصل مع المرشدين والشركات عبر نظام المطابقة الذكي"),
        ("home.features_subtitle", "اكتشف ما يجعل InternWay المنصة المثالية لرحلة تدريبك"),
        ("home.feature.matching.title", "مطابقة ذكية بالذكاء الاصطناعي"),
        ("home.feature.matching.body", "خوارزميتنا تطابقك مع أفضل الفرص"),
        ("home.feature.cv.title", "تحليل السيرة الذاتية"),
        ("home.feature.cv.body", "احصل على ملاحظات فورية لتحسين سيرتك الذاتية"),
        ("home.feature.booking.title", "حجز جلسات الإرشاد"),
        ("home.feature.booking.body", "احجز جلسات مع مرشدين ذوي خبرة في مجالك"),
        ("home.feature.quality.title", "فرص مميزة"),
        ("home.feature.quality.body", "تدريبات مختارة من أفضل الشركات"),
        ("home.how_subtitle", "ابدأ في ثلاث خطوات بسيطة"),
        ("home.step.profile.title", "أنشئ ملفك الشخصي"),
        ("home.step.profile.body", "سجّل وأكمل ملفك بمهاراتك واهتماماتك"),
        ("home.step.match.title", "احصل على المطابقة"),
        ("home.step.match.body", "الذكاء الاصطناعي يجد لك أنسب الفرص"),
        ("home.step.journey.title", "ابدأ رحلتك"),
        ("home.step.journey.body", "تواصل مع المرشدين وقدّم على التدريبات"),
        ("home.stat.students", "طالب نشط"),
        ("home.stat.companies", "شركة شريكة"),
        ("home.stat.mentors", "مرشد خبير"),
        ("home.stat.success", "نسبة النجاح"),
        ("home.ready", "جاهز تبدأ رحلتك؟"),
        ("home.join_thousands", "انضم لآلاف الطلاب اللي لقوا فرصتهم المثالية"),
        ("home.get_started_now", "ابدأ دلوقتي"),
        ("home.footer", "جميع الحقوق محفوظة."),
        // Role selection
        ("role.title", "اختر دورك"),
        ("role.subtitle", "اختر الطريقة اللي حابب تنضم بيها لـ InternWay"),
        ("role.student", "طالب"),
        ("role.student_desc", "ببحث عن تدريب وإرشاد"),
        ("role.mentor", "مرشد"),
        ("role.mentor_desc", "بوجه الجيل القادم"),
        ("role.company", "شركة"),
        ("role.company_desc", "بوظف أفضل المواهب"),
        ("role.select_first", "يرجى اختيار الدور أولاً"),
        // Login
        ("login.welcome_title", "مرحباً بك في InternWay"),
        ("login.welcome_subtitle", "رحلتك للحصول على التدريب المثالي تبدأ من هنا"),
        ("login.title", "مرحباً بعودتك"),
        ("login.subtitle", "أدخل بياناتك للدخول لحسابك"),
        ("login.role_title", "اختر دورك"),
        ("login.remember_me", "تذكرني"),
        ("login.forgot_password", "نسيت كلمة المرور؟"),
        ("login.button", "تسجيل الدخول"),
        ("login.no_account", "ليس لديك حساب؟"),
        ("login.failed", "حدث خطأ في تسجيل الدخول"),
        // Shared form labels
        ("form.email_label", "البريد الإلكتروني *"),
        ("form.email_placeholder", "أدخل بريدك الإلكتروني"),
        ("form.password_label", "كلمة المرور *"),
        ("form.password_placeholder", "أدخل كلمة المرور"),
        ("form.confirm_password", "تأكيد كلمة المرور"),
        ("form.full_name", "الاسم بالكامل"),
        ("form.university", "الجامعة"),
        ("form.college", "الكلية"),
        ("form.degree", "الدرجة العلمية"),
        ("form.major", "التخصص"),
        ("form.grad_year", "سنة التخرج"),
        ("form.work_email", "بريد العمل"),
        ("form.company_name", "اسم الشركة"),
        ("form.industry", "المجال"),
        ("form.location", "الموقع"),
        ("form.website", "الموقع الإلكتروني (اختياري)"),
        ("form.address", "العنوان (اختياري)"),
        ("form.company_overview", "نبذة عن الشركة"),
        ("form.company_placeholder", "احكي لنا عن رؤية شركتك وماذا تقدم..."),
        ("form.expertise", "مجال الخبرة"),
        ("form.years_experience", "سنوات الخبرة"),
        ("form.job_title", "المسمى الوظيفي الحالي"),
        ("form.linkedin", "رابط لينكد إن / الملف الشخصي"),
        // Signup
        ("signup.create_account", "إنشاء حساب"),
        ("signup.start_journey", "ابدأ رحلتك المهنية مع InternWay"),
        ("signup.upload_cv", "رفع السيرة الذاتية"),
        ("signup.click_to_upload", "اضغط للرفع أو اسحب الملف هنا"),
        ("signup.max_size", "PDF, DOCX (الحد الأقصى 5 ميجا)"),
        ("signup.already_have_account", "لديك حساب بالفعل؟"),
        ("signup.company.title", "إنشاء حساب شركة"),
        ("signup.company.subtitle", "أكمل ملف شركتك لتوظيف المواهب"),
        ("signup.mentor.title", "إنشاء حساب مرشد"),
        ("signup.mentor.subtitle", "شارك خبرتك ووجه الطلاب"),
        ("signup.success", "تم إنشاء الحساب بنجاح!"),
        ("signup.failed", "فشل التسجيل. يرجى المحاولة مرة أخرى."),
        // Validation
        ("validation.required", "مطلوب"),
        ("validation.invalid_email", "بريد إلكتروني غير صالح"),
        ("validation.min_chars", "{n} أحرف على الأقل"),
        ("validation.mismatch", "غير متطابق"),
        ("validation.invalid_url", "رابط غير صالح"),
        ("validation.start_with_http", "يجب أن يبدأ بـ http"),
        ("validation.invalid", "غير صالح"),
        ("validation.max_file_size", "الحد الأقصى {n} ميجا"),
        // Password recovery
        ("auth.back_to_login", "العودة لتسجيل الدخول"),
        ("forgot.title", "نسيت كلمة المرور؟"),
        ("forgot.subtitle", "أدخل عنوان بريدك الإلكتروني وسنرسل لك رابطاً لإعادة تعيين كلمة المرور."),
        ("forgot.email_label", "البريد الإلكتروني *"),
        ("forgot.send", "إرسال رابط إعادة التعيين"),
        ("forgot.success_title", "تحقق من بريدك الإلكتروني"),
        ("forgot.success_message", "لقد أرسلنا رابط إعادة تعيين كلمة المرور إلى بريدك الإلكتروني. يرجى التحقق من صندوق الوارد واتباع التعليمات."),
        ("forgot.invalid_email", "يرجى إدخال عنوان بريد إلكتروني صحيح"),
        ("forgot.email_required", "البريد الإلكتروني مطلوب"),
        ("forgot.failed", "حدث خطأ. يرجى المحاولة مرة أخرى."),
        ("reset.title", "إعادة تعيين كلمة المرور"),
        ("reset.subtitle", "أدخل كلمة المرور الجديدة أدناه."),
        ("reset.new_password_label", "كلمة المرور الجديدة *"),
        ("reset.new_password_placeholder", "أدخل كلمة المرور الجديدة"),
        ("reset.confirm_label", "تأكيد كلمة المرور *"),
        ("reset.confirm_placeholder", "أكد كلمة المرور الجديدة"),
        ("reset.button", "إعادة تعيين كلمة المرور"),
        ("reset.success_title", "تم إعادة تعيين كلمة المرور بنجاح"),
        ("reset.success_message", "تم إعادة تعيين كلمة المرور بنجاح. يمكنك الآن تسجيل الدخول باستخدام كلمة المرور الجديدة."),
        ("reset.password_required", "كلمة المرور مطلوبة"),
        ("reset.password_too_short", "يجب أن تكون كلمة المرور 8 أحرف على الأقل"),
        ("reset.password_mismatch", "كلمات المرور غير متطابقة"),
        ("reset.invalid_token", "رابط إعادة التعيين غير صالح أو منتهي الصلاحية"),
        ("reset.token_required", "رمز إعادة التعيين مفقود"),
        // Student dashboard
        ("student.welcome_back", "مرحباً بعودتك!"),
        ("student.career_journey", "إليك آخر المستجدات في رحلتك المهنية"),
        ("student.internships_applied", "تدريبات قدمت عليها"),
        ("student.sessions_booked", "جلسات محجوزة"),
        ("student.upcoming_session", "الجلسة القادمة"),
        ("student.recommended_internships", "تدريبات مقترحة"),
        ("student.recommended_mentors", "مرشدون مقترحون"),
        ("student.no_internships", "لا توجد تدريبات مقترحة بعد"),
        ("student.no_mentors", "لا يوجد مرشدون مقترحون بعد"),
        ("student.applied", "تم إرسال طلبك بنجاح!"),
        ("student.session_booked", "تم حجز الجلسة بنجاح!"),
        // Internships
        ("internships.title", "تصفح التدريبات"),
        ("internships.subtitle", "اعثر على الفرصة المثالية لبدء مسيرتك"),
        ("internships.search", "ابحث عن تدريب أو شركة..."),
        ("internships.all_locations", "كل المواقع"),
        ("internships.all_types", "كل الأنواع"),
        ("internships.deadline", "آخر موعد"),
        ("internships.unpaid", "غير مدفوع"),
        ("internships.per_month", "جنيه/شهر"),
        ("internships.none", "لا توجد تدريبات مطابقة"),
        ("work.remote", "عن بعد"),
        ("work.hybrid", "هجين"),
        ("work.on_site", "في المقر"),
        // Mentorships
        ("mentorships.title", "اعثر على مرشد"),
        ("mentorships.subtitle", "تواصل مع محترفين يوجهون مسيرتك"),
        ("mentorships.search", "ابحث بالاسم أو المسمى أو المهارة..."),
        ("mentorships.all_fields", "كل المجالات"),
        ("mentorships.years", "سنوات"),
        ("mentorships.reviews", "تقييم"),
        ("mentorships.next_available", "أقرب موعد"),
        ("mentorships.none", "لم يتم العثور على مرشدين"),
        ("mentorships.booking", "جارٍ حجز جلسة مع"),
        ("field.software", "هندسة البرمجيات"),
        ("field.data", "علوم البيانات"),
        ("field.ai", "الذكاء الاصطناعي"),
        ("field.design", "التصميم"),
        // Sessions
        ("sessions.title", "جلساتي"),
        ("sessions.subtitle", "إدارة جلسات الإرشاد المحجوزة"),
        ("sessions.with", "مع"),
        ("sessions.completed", "مكتملة"),
        ("sessions.confirmed", "مؤكدة"),
        ("sessions.waiting", "في انتظار التأكيد"),
        ("sessions.join", "انضم للاجتماع"),
        ("sessions.waiting_button", "في انتظار المرشد"),
        ("sessions.reschedule", "إعادة جدولة"),
        ("sessions.cancel", "إلغاء"),
        ("sessions.cancelled", "تم إلغاء الجلسة"),
        ("sessions.leave_review", "اترك تقييماً"),
        ("sessions.none", "لا توجد جلسات بعد"),
        // Profile
        ("profile.title", "ملفي الشخصي"),
        ("profile.subtitle", "حافظ على تحديث بياناتك"),
        ("profile.personal", "المعلومات الشخصية"),
        ("profile.full_name", "الاسم بالكامل"),
        ("profile.email", "البريد الإلكتروني"),
        ("profile.phone", "رقم الهاتف"),
        ("profile.location", "الموقع"),
        ("profile.education", "التعليم"),
        ("profile.university", "الجامعة"),
        ("profile.college", "الكلية"),
        ("profile.major", "التخصص"),
        ("profile.graduation_year", "سنة التخرج"),
        ("profile.skills", "المهارات"),
        ("profile.add_skill_placeholder", "أضف مهارة"),
        ("profile.add", "إضافة"),
        ("profile.upload_cv_title", "رفع السيرة الذاتية"),
        ("profile.drag_drop_cv", "اسحب سيرتك الذاتية وأفلتها هنا"),
        ("profile.click_browse", "أو اضغط للتصفح (PDF, DOC, DOCX)"),
        ("profile.file_selected", "تم اختيار الملف"),
        ("profile.click_to_change", "اضغط للتغيير"),
        ("profile.save", "حفظ التغييرات"),
        ("profile.saved", "تم حفظ الملف الشخصي بنجاح!"),
        ("profile.bad_cv_type", "يرجى رفع ملف PDF أو DOC أو DOCX"),
        // Mentor dashboard
        ("mentor.welcome", "مرحباً بعودتك أيها المرشد!"),
        ("mentor.subtitle", "نظرة عامة على نشاطك في الإرشاد"),
        ("mentor.total_sessions", "إجمالي الجلسات"),
        ("mentor.active_mentees", "المتدربون النشطون"),
        ("mentor.hours_this_month", "ساعات هذا الشهر"),
        ("mentor.upcoming_sessions", "الجلسات القادمة"),
        ("mentor.recent_mentees", "أحدث المتدربين"),
        ("mentor.my_mentees", "متدربيني"),
        ("mentor.no_sessions", "لا توجد جلسات قادمة"),
        ("mentor.no_mentees", "لا يوجد متدربون بعد"),
        ("mentor.sessions_completed", "جلسات مكتملة"),
        ("mentor.today", "اليوم"),
        ("mentor.tomorrow", "غداً"),
        ("mentor.topic.career_guidance", "التوجيه المهني"),
        ("mentor.topic.resume_review", "مراجعة السيرة الذاتية"),
        ("mentor.topic.interview_prep", "التحضير للمقابلات"),
        ("mentor.field.software", "هندسة البرمجيات"),
        ("mentor.field.data", "علوم البيانات"),
        ("mentor.field.design", "التصميم"),
        // Time
        ("time.am", "ص"),
        ("time.pm", "م"),
        ("time.hour", "ساعة"),
        ("time.min", "دقيقة"),
        ("month.jan", "يناير"),
        ("month.feb", "فبراير"),
        ("month.mar", "مارس"),
        ("month.apr", "أبريل"),
        ("month.may", "مايو"),
        ("month.jun", "يونيو"),
        ("month.jul", "يوليو"),
        ("month.aug", "أغسطس"),
        ("month.sep", "سبتمبر"),
        ("month.oct", "أكتوبر"),
        ("month.nov", "نوفمبر"),
        ("month.dec", "ديسمبر"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_english_key_resolves_in_every_language() {
        for lang in Lang::ALL {
            let dict = lookup(lang);
            for key in EN.keys() {
                let text = dict.get(key);
                assert!(
                    text.is_some_and(|s| !s.trim().is_empty()),
                    "{key:?} missing or blank for {}",
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn tables_have_no_extra_or_duplicate_keys() {
        let en: HashSet<_> = EN.keys().collect();
        assert_eq!(en.len(), EN.len(), "duplicate key in en");
        for lang in Lang::ALL {
            let dict = lookup(lang);
            let keys: HashSet<_> = dict.keys().collect();
            assert_eq!(keys.len(), dict.len(), "duplicate key in {}", lang.code());
            assert_eq!(keys, en, "key sets differ for {}", lang.code());
        }
    }

    #[test]
    fn lookup_has_no_fallback_but_t_does() {
        assert_eq!(lookup(Lang::Ar).get("missing.key"), None);
        assert_eq!(t(Lang::Ar, "missing.key"), "missing.key");
        assert_eq!(t(Lang::En, "nav.login"), "Login");
        assert_eq!(t(Lang::Ar, "nav.login"), "دخول");
    }

    #[test]
    fn lang_codes_and_direction() {
        assert_eq!(Lang::from_code("AR"), Some(Lang::Ar));
        assert_eq!(Lang::from_code("ar-EG"), Some(Lang::Ar));
        assert_eq!(Lang::from_code("en-GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::default(), Lang::En);
    }

    #[test]
    fn placeholders_and_dates() {
        assert_eq!(t_n(Lang::En, "validation.min_chars", 8), "Min 8 chars");
        let d = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(format_date(Lang::En, d), "Dec 30, 2024");
        assert_eq!(format_date(Lang::Ar, d), "30 ديسمبر 2024");
        assert_eq!(format_time(Lang::En, (15, 0)), "3:00 PM");
        assert_eq!(format_time(Lang::En, (0, 5)), "12:05 AM");
        assert_eq!(format_time(Lang::Ar, (10, 30)), "10:30 ص");
    }
}
