mod assembly;
