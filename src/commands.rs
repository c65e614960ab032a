macro_rules! list {
    ($($pub:vis $module:ident$(: {$($cmd:ident),+})?),+) => {
        $(
            $pub mod $module;
            use $module::$module;

            $(
                $(
                    #[allow(unused_imports)]
                    use $module::$cmd;
                )+
            )?
        )+

        pub fn list() -> Vec<crate::utils::poise::Command> {
            vec![
                $($module()),+
            ]
        }
    };
}

list! {
    pub eightball,
    pub batlibs,
    pub uwuify,
    translate
}

pub mod target;

pub(crate) trait LogCommands {
    async fn log_command(&self);
}

impl LogCommands for crate::utils::Context<'_> {
    async fn log_command(&self) {
        let channel = self
            .channel_id()
            .name(self.http())
            .await
            .map_or("dms".to_string(), |c| format!("#{c}"));
        tracing::info!(
            "@{} ({}): {}",
            self.author().name,
            channel,
            self.invocation_string()
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn command_names() {
        let names: Vec<String> = super::list().into_iter().map(|cmd| cmd.name).collect();

        assert_eq!(names, ["8ball", "batlibs", "uwuify", "translate"]);
    }

    #[test]
    fn context_menu_commands() {
        let menus: Vec<String> = super::list()
            .into_iter()
            .filter_map(|cmd| cmd.context_menu_name)
            .collect();

        assert_eq!(menus, ["Uwuify", "Translate to English"]);
    }
}
