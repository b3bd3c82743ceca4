//! Sub-app navigation for every overlay application.

use dashdeck_types::IconName as I;
use dashdeck_types::OverlayId;

use super::Tab;

pub(super) fn tabs(app: OverlayId) -> &'static [Tab] {
    match app {
        OverlayId::Studio => STUDIO,
        OverlayId::Media => MEDIA,
        OverlayId::Gamification => GAMIFICATION,
        OverlayId::Leisure => LEISURE,
        OverlayId::Market => MARKET,
        OverlayId::Lifestyle => LIFESTYLE,
        OverlayId::Hobbies => HOBBIES,
        OverlayId::Knowledge => KNOWLEDGE,
        OverlayId::Sports => SPORTS,
        OverlayId::Religion => RELIGION,
        OverlayId::Services => SERVICES,
    }
}

const STUDIO: &[Tab] = &[
    ("designer", "Designer", &[
        ("templates", "Templates", I::Photo),
        ("create_new", "Create New", I::Plus),
        ("my_designs", "My Designs", I::InboxArrowDown),
        ("brand_kit", "Brand Kit", I::Briefcase),
    ]),
    ("video", "Video", &[
        ("video_editor", "Video Editor", I::Film),
        ("ai_enhancement", "AI Enhancement", I::Sparkles),
        ("my_videos", "My Videos", I::InboxArrowDown),
        ("export", "Export", I::PaperAirplane),
    ]),
    ("coder", "Coder", &[
        ("code_editor", "Code Editor", I::Cog6Tooth),
        ("ai_debugger", "AI Debugger", I::Sparkles),
        ("projects", "Projects", I::Briefcase),
        ("syntax_highlighting", "Syntax", I::Cog6Tooth),
    ]),
    ("office", "Office", &[
        ("documents", "Documents", I::BookOpen),
        ("spreadsheets", "Spreadsheets", I::Calculator),
        ("presentations", "Presentations", I::Film),
        ("file_management", "File Management", I::Briefcase),
    ]),
    ("creative_marketplace", "Creative Marketplace", &[
        ("stock_photos", "Stock Photos", I::Photo),
        ("audio_library", "Audio Library", I::Film),
        ("3d_models", "3D Models", I::PuzzlePiece),
        ("fonts", "Fonts", I::Sparkles),
    ]),
];

const MEDIA: &[Tab] = &[
    ("movies", "Movies", &[
        ("movie_library", "Movie Library", I::Film),
        ("categories", "Categories", I::SquaresPlus),
        ("watch_list", "Watch List", I::Star),
        ("continue_watching", "Continue", I::Home),
    ]),
    ("series", "Series", &[
        ("series_library", "Series Library", I::Film),
        ("episodes", "Episodes", I::Film),
        ("seasons", "Seasons", I::CalendarDays),
        ("my_series", "My Series", I::Star),
    ]),
    ("docs", "Docs", &[
        ("documentary_library", "Library", I::BookOpen),
        ("educational", "Educational", I::GraduationCap),
        ("topics", "Topics", I::SquaresPlus),
        ("featured", "Featured", I::Star),
    ]),
    ("kids", "Kids", &[
        ("kids_content", "Kids Content", I::PuzzlePiece),
        ("educational", "Educational", I::GraduationCap),
        ("entertainment", "Entertainment", I::Film),
        ("parental_controls", "Controls", I::Cog6Tooth),
    ]),
    ("content_management", "Content Management", &[
        ("upload", "Upload", I::InboxArrowDown),
        ("schedule", "Schedule", I::CalendarDays),
        ("moderate", "Moderate", I::ExclamationTriangle),
        ("analytics", "Analytics", I::Calculator),
    ]),
];

const GAMIFICATION: &[Tab] = &[
    ("quizzes", "Quizzes & Challenges", &[
        ("quiz_builder", "Quiz Builder", I::Plus),
        ("challenge_creator", "Challenge Creator", I::PuzzlePiece),
        ("question_bank", "Question Bank", I::BookOpen),
        ("templates", "Templates", I::Photo),
    ]),
    ("rewards", "Rewards & Leaderboards", &[
        ("reward_system", "Reward System", I::Star),
        ("leaderboard_setup", "Leaderboard", I::Trophy),
        ("badge_designer", "Badge Designer", I::Sparkles),
        ("point_system", "Point System", I::Calculator),
    ]),
    ("analytics", "Analytics", &[
        ("engagement_metrics", "Engagement", I::Calculator),
        ("performance_analytics", "Performance", I::Calculator),
        ("progress_tracking", "Progress", I::Home),
        ("reports", "Reports", I::BookOpen),
    ]),
];

const LEISURE: &[Tab] = &[
    ("clubs", "Clubs & Community", &[
        ("club_directory", "Club Directory", I::BookOpen),
        ("club_management", "Management", I::Cog6Tooth),
        ("community_groups", "Community", I::ChatBubbleLeftRight),
        ("membership", "Membership", I::Star),
    ]),
    ("events", "Events Calendar & Booking", &[
        ("calendar_view", "Calendar View", I::CalendarDays),
        ("event_creation", "Event Creation", I::Plus),
        ("booking_system", "Booking System", I::Briefcase),
        ("ticketing", "Ticketing", I::PuzzlePiece),
    ]),
];

const MARKET: &[Tab] = &[
    ("marketplace", "Marketplace", &[
        ("product_listings", "Listings", I::BuildingStorefront),
        ("categories", "Categories", I::SquaresPlus),
        ("search", "Search", I::Home),
        ("featured", "Featured", I::Star),
    ]),
    ("orders", "Orders", &[
        ("order_management", "Management", I::Cog6Tooth),
        ("order_history", "History", I::CalendarDays),
        ("tracking", "Tracking", I::PaperAirplane),
        ("returns", "Returns", I::ArrowLeftCircle),
    ]),
    ("sellers", "Sellers", &[
        ("seller_profiles", "Profiles", I::Briefcase),
        ("seller_verification", "Verification", I::Check),
        ("seller_analytics", "Analytics", I::Calculator),
        ("reviews", "Reviews", I::Star),
    ]),
    ("offers", "Offers", &[
        ("discount_codes", "Discounts", I::PuzzlePiece),
        ("promotions", "Promotions", I::BellAlert),
        ("special_offers", "Special Offers", I::Star),
        ("bulk_pricing", "Bulk Pricing", I::Calculator),
    ]),
];

const LIFESTYLE: &[Tab] = &[
    ("food", "Food", &[
        ("restaurant_finder", "Finder", I::Home),
        ("reservations", "Reservations", I::CalendarDays),
        ("delivery", "Delivery", I::PaperAirplane),
        ("reviews", "Reviews", I::Star),
    ]),
    ("events", "Events", &[
        ("event_finder", "Finder", I::Home),
        ("ticket_booking", "Booking", I::PuzzlePiece),
        ("event_calendar", "Calendar", I::CalendarDays),
        ("my_events", "My Events", I::Star),
    ]),
    ("booking", "Booking", &[
        ("hotel_booking", "Hotels", I::BuildingStorefront),
        ("property_rental", "Rentals", I::Home),
        ("vacation_packages", "Packages", I::Briefcase),
        ("travel_insurance", "Insurance", I::Check),
    ]),
    ("flight", "Flight", &[
        ("flight_search", "Search", I::Home),
        ("flight_booking", "Booking", I::Briefcase),
        ("check_in", "Check-in", I::Check),
        ("flight_status", "Status", I::BellAlert),
    ]),
    ("car", "Car", &[
        ("car_rental", "Car Rental", I::Briefcase),
        ("car_sharing", "Car Sharing", I::ChatBubbleLeftRight),
        ("airport_transfers", "Transfers", I::PaperAirplane),
        ("long_term_rental", "Long-term", I::CalendarDays),
    ]),
];

const HOBBIES: &[Tab] = &[
    ("crafts", "Crafts", &[
        ("craft_tutorials", "Tutorials", I::BookOpen),
        ("project_ideas", "Ideas", I::Sparkles),
        ("materials", "Materials", I::Briefcase),
        ("community", "Community", I::ChatBubbleLeftRight),
    ]),
    ("photography", "Photography", &[
        ("photo_gallery", "Gallery", I::Photo),
        ("photography_tips", "Tips", I::Sparkles),
        ("camera_reviews", "Reviews", I::Star),
        ("photo_contests", "Contests", I::Trophy),
    ]),
    ("cooking", "Cooking", &[
        ("recipe_library", "Recipes", I::BookOpen),
        ("cooking_classes", "Classes", I::GraduationCap),
        ("ingredient_guide", "Ingredients", I::PuzzlePiece),
        ("meal_planning", "Planning", I::CalendarDays),
        ("community_competitions", "Competitions", I::Trophy),
    ]),
];

const KNOWLEDGE: &[Tab] = &[
    ("books", "Books", &[
        ("digital_library", "Library", I::BookOpen),
        ("ebooks", "E-Books", I::BookOpen),
        ("reading_lists", "Reading Lists", I::Star),
        ("book_reviews", "Reviews", I::Star),
    ]),
    ("courses", "Courses", &[
        ("course_catalog", "Catalog", I::BookOpen),
        ("my_courses", "My Courses", I::Star),
        ("course_builder", "Builder", I::Plus),
        ("progress_tracking", "Progress", I::Home),
    ]),
    ("exams", "Exams", &[
        ("exam_builder", "Builder", I::Plus),
        ("test_scheduler", "Scheduler", I::CalendarDays),
        ("grading_system", "Grading", I::Calculator),
        ("performance_reports", "Reports", I::BookOpen),
    ]),
    ("certificates", "Certificates", &[
        ("certificate_templates", "Templates", I::Photo),
        ("certificate_issuance", "Issuance", I::PaperAirplane),
        ("verification_system", "Verification", I::Check),
        ("digital_badges", "Badges", I::Sparkles),
    ]),
    ("ai_study_assist", "AI Study Assist", &[
        ("text_summarizer", "Summarizer", I::Sparkles),
        ("flashcard_generator", "Flashcards", I::PuzzlePiece),
        ("personalized_learning", "Personalized", I::Star),
        ("study_planner", "Planner", I::CalendarDays),
    ]),
];

const TEAM_SPORT: &[(&str, &str, I)] = &[
    ("team_roster", "Roster", I::Briefcase),
    ("match_schedule", "Schedule", I::CalendarDays),
    ("performance_stats", "Stats", I::Calculator),
    ("training_plans", "Training", I::Home),
];

const SPORTS: &[Tab] = &[
    ("football", "Football", TEAM_SPORT),
    ("basketball", "Basketball", TEAM_SPORT),
    ("soccer", "Soccer", TEAM_SPORT),
    ("fitness_tracking", "Fitness Tracking", &[
        ("personal_training", "Training", I::Home),
        ("progress_monitoring", "Progress", I::Home),
        ("health_metrics", "Metrics", I::Calculator),
        ("goal_setting", "Goals", I::Star),
    ]),
];

const RELIGION: &[Tab] = &[
    ("quran", "Quran", &[
        ("digital_quran", "Digital Quran", I::BookOpen),
        ("search_functionality", "Search", I::Home),
        ("recitation_tools", "Recitation", I::Sparkles),
        ("translation", "Translation", I::ChatBubbleLeftRight),
    ]),
    ("hadith", "Hadith", &[
        ("hadith_collection", "Collection", I::BookOpen),
        ("search_hadith", "Search", I::Home),
        ("categorization", "Categories", I::SquaresPlus),
        ("explanation", "Explanation", I::BookOpen),
    ]),
    ("prayer", "Prayer", &[
        ("prayer_times", "Times", I::CalendarDays),
        ("qibla_direction", "Qibla", I::Home),
        ("prayer_tracker", "Tracker", I::Check),
        ("mosque_finder", "Finder", I::Home),
    ]),
    ("fasting", "Fasting", &[
        ("ramadan_tracker", "Tracker", I::CalendarDays),
        ("fasting_schedule", "Schedule", I::CalendarDays),
        ("duas_collection", "Duas", I::BookOpen),
        ("nutrition_tips", "Tips", I::Heart),
    ]),
];

const SERVICES: &[Tab] = &[
    ("housekeeping", "Housekeeping", &[
        ("service_providers", "Providers", I::Briefcase),
        ("booking_system", "Booking", I::CalendarDays),
        ("provider_reviews", "Reviews", I::Star),
        ("service_packages", "Packages", I::Briefcase),
    ]),
    ("gardening", "Gardening", &[
        ("garden_services", "Services", I::Sparkles),
        ("lawn_care", "Lawn Care", I::Home),
        ("landscaping", "Landscaping", I::Photo),
        ("plant_care", "Plant Care", I::Heart),
    ]),
    ("maintenance", "Maintenance", &[
        ("home_repair", "Repair", I::WrenchScrewdriver),
        ("plumbing", "Plumbing", I::WrenchScrewdriver),
        ("electrical", "Electrical", I::Sparkles),
        ("hvac", "HVAC", I::Cog6Tooth),
    ]),
    ("babysitting", "Babysitting", &[
        ("babysitters", "Babysitters", I::Briefcase),
        ("booking_system", "Booking", I::CalendarDays),
        ("background_checks", "Checks", I::Check),
        ("parent_reviews", "Reviews", I::Star),
    ]),
];
