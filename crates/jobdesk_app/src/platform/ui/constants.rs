pub const WINDOW_TITLE: &str = "Your Next Job?";
pub const PROMPT: &str = "jobdesk> ";

pub const HELP_TEXT: &str = "\
Commands:
  list                     show all jobs
  show                     show jobs, the form and the last status
  select <n>               load job number <n> into the form
  set <field> <text>       edit a form field (company, title, location, min, max)
  type <kind>              set salary type (hourly, yearly, n/a)
  save                     add a new job from the form
  update                   overwrite the selected job from the form
  delete                   remove the selected job
  help                     show this text
  quit | exit              save all jobs and leave";
