pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const ROW: &str = "max-w-7xl mx-auto flex flex-col md:flex-row gap-6 py-6";
pub const TOP_BAR: &str = "max-w-7xl mx-auto flex justify-end pt-4";
pub const INFO_COLUMN: &str = "md:w-1/3";
pub const FORM_COLUMN: &str = "md:w-2/3";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const FORM: &str = "mt-4 space-y-4";
pub const FORM_GROUP: &str = "space-y-1";
pub const OPTION_ROW: &str = "grid grid-cols-3 gap-4";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const CHOICE_LABEL: &str = "inline-flex items-center gap-2 text-sm text-gray-900 dark:text-white";
pub const DIVIDER: &str = "border-gray-200 dark:border-gray-700";
pub const MESSAGE: &str = "text-center py-16";
pub const MESSAGE_HEADER: &str = "message-header text-2xl font-bold text-gray-900 dark:text-white";
pub const MESSAGE_BODY: &str = "message-body mt-4 text-gray-600 dark:text-gray-300";
