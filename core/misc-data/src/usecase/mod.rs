pub(crate) mod write_status;

pub(crate) use write_status::WriteStatusUseCase;
